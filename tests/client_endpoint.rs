//! End-to-end tests of `POST /client` through the axum router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};
use tower::ServiceExt;

use client_registry::client::{age_at, FixedClock};
use client_registry::http_server::{HttpServer, ServerConfig};
use client_registry::store::InMemoryStore;

fn new_year_2024() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn app(store: Arc<InMemoryStore>) -> Router {
    HttpServer::with_parts(ServerConfig::default(), store, FixedClock(new_year_2024())).router()
}

fn ivanov(status: bool) -> Value {
    json!({
        "lastName": "Ivanov",
        "firstName": "Ivan",
        "patrName": "Ivanovich",
        "birthDate": "1990-05-20T11:16:32",
        "status": status
    })
}

fn post(token: Option<&str>, content_type: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/client");
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    builder.body(Body::from(body)).unwrap()
}

fn post_json(payload: &Value) -> Request<Body> {
    post(Some("Token"), Some("application/json"), payload.to_string())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn creates_then_updates_same_identity() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(store.clone());

    let (status, body) = send(&app, post_json(&ivanov(true))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["code"], 201);
    assert_eq!(body["data"]["FIO"], "Ivanov Ivan Ivanovich");
    assert_eq!(body["data"]["age"], 33);

    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("usr_"));
    assert_eq!(id.len(), "usr_".len() + 20);
    assert!(id["usr_".len()..].chars().all(|c| c.is_ascii_digit()));

    let (status, body) = send(&app, post_json(&ivanov(false))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"], json!({"id": id, "FIO": "Ivanov Ivan Ivanovich", "age": 33}));

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert!(!records[0].status);
}

#[tokio::test]
async fn age_matches_calculator() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(store.clone());

    let mut payload = ivanov(true);
    payload["birthDate"] = json!("2000-01-01T00:00:00");
    let (status, body) = send(&app, post_json(&payload)).await;

    let born = NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["age"], age_at(born, new_year_2024()));
    assert_eq!(body["data"]["age"], 24);
}

#[tokio::test]
async fn distinct_identities_create_distinct_records() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(store.clone());

    let (_, first) = send(&app, post_json(&ivanov(true))).await;
    let mut other = ivanov(true);
    other["lastName"] = json!("ivanov");
    let (status, second) = send(&app, post_json(&other)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(store.records().len(), 2);
}

#[tokio::test]
async fn wrong_credential_is_rejected_without_mutation() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(store.clone());

    for token in [None, Some("token"), Some("Token ")] {
        let request = post(token, Some("application/json"), ivanov(true).to_string());
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], 401);
        assert!(body.get("data").is_none());
    }

    assert!(store.records().is_empty());
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn auth_is_checked_before_body() {
    let app = app(Arc::new(InMemoryStore::new()));
    let (status, _) = send(&app, post(Some("nope"), Some("text/plain"), "garbage".into())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_fields_listed_in_order() {
    let app = app(Arc::new(InMemoryStore::new()));

    let mut payload = ivanov(true);
    payload.as_object_mut().unwrap().remove("status");
    payload.as_object_mut().unwrap().remove("firstName");

    let (status, body) = send(&app, post_json(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Missing fields: firstName, status");
}

#[tokio::test]
async fn body_schema_errors() {
    let store = Arc::new(InMemoryStore::new());
    let app = app(store.clone());

    let (status, body) = send(&app, post(Some("Token"), None, ivanov(true).to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Content-Type must be application/json");

    let (status, body) =
        send(&app, post(Some("Token"), Some("application/json"), "[1,2,3]".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid JSON");

    let (status, _) =
        send(&app, post(Some("Token"), Some("application/json"), "{\"a\":".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn type_and_format_errors() {
    let app = app(Arc::new(InMemoryStore::new()));

    let mut payload = ivanov(true);
    payload["status"] = json!("true");
    let (status, body) = send(&app, post_json(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Field status must be a boolean");

    let mut payload = ivanov(true);
    payload["firstName"] = json!("  ");
    let (status, body) = send(&app, post_json(&payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Fields lastName, firstName, patrName and birthDate must be non-empty strings"
    );

    for bad in ["20.05.1990", "-990-05-20T11:16:32", "0000-05-20T11:16:32"] {
        let mut payload = ivanov(true);
        payload["birthDate"] = json!(bad);
        let (status, body) = send(&app, post_json(&payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(body["message"], "Invalid birthDate format. Use YYYY-MM-DDTHH:MM:SS");
    }
}

#[tokio::test]
async fn corrupt_storage_is_a_server_error() {
    let app = app(Arc::new(InMemoryStore::corrupt("unexpected end of input")));

    let (status, body) = send(&app, post_json(&ivanov(true))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 500);
}

#[tokio::test]
async fn custom_auth_header_and_secret() {
    let config = ServerConfig {
        auth_header: "X-Api-Key".to_string(),
        auth_token: "s3cret".to_string(),
        ..Default::default()
    };
    let app = HttpServer::with_parts(
        config,
        InMemoryStore::new(),
        FixedClock(new_year_2024()),
    )
    .router();

    let request = Request::builder()
        .method("POST")
        .uri("/client")
        .header("x-api-key", "s3cret")
        .header("Content-Type", "application/json")
        .body(Body::from(ivanov(true).to_string()))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, post_json(&ivanov(true))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_check() {
    let app = app(Arc::new(InMemoryStore::new()));
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}));
}
