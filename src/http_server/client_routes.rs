//! Client HTTP Routes
//!
//! `POST /client`: shared-secret check, payload validation, then upsert.
//! Headers and body are taken raw so the credential is checked before the
//! body is parsed and every failure uses the service's error envelope.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use subtle::ConstantTimeEq;

use crate::client::{validate_request, ClientService, ClientView, Clock, UpsertOutcome};
use crate::observability::{events, Logger};
use crate::store::ClientStore;

use super::errors::{ApiError, ApiResult};
use super::response::SuccessEnvelope;

/// Shared state of the client endpoint
pub struct ClientState<S: ClientStore, C: Clock> {
    pub service: ClientService<S, C>,
    auth_header: String,
    auth_token: String,
}

impl<S: ClientStore, C: Clock> ClientState<S, C> {
    pub fn new(
        service: ClientService<S, C>,
        auth_header: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            service,
            auth_header: auth_header.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Exact match of the credential header against the shared secret
    fn authorize(&self, headers: &HeaderMap) -> ApiResult<()> {
        let presented = headers
            .get(self.auth_header.as_str())
            .map(|v| v.as_bytes())
            .ok_or(ApiError::Unauthorized)?;

        if bool::from(presented.ct_eq(self.auth_token.as_bytes())) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

/// Client routes with shared state
pub fn client_routes<S, C>(state: Arc<ClientState<S, C>>) -> Router
where
    S: ClientStore + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/client", post(upsert_client_handler::<S, C>))
        .with_state(state)
}

type ClientResponse = (StatusCode, Json<SuccessEnvelope<ClientView>>);

/// Create-or-update handler
async fn upsert_client_handler<S, C>(
    State(state): State<Arc<ClientState<S, C>>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<ClientResponse>
where
    S: ClientStore + 'static,
    C: Clock + 'static,
{
    upsert_client(state, &headers, &body)
        .await
        .inspect_err(ApiError::log)
}

async fn upsert_client<S, C>(
    state: Arc<ClientState<S, C>>,
    headers: &HeaderMap,
    body: &[u8],
) -> ApiResult<ClientResponse>
where
    S: ClientStore + 'static,
    C: Clock + 'static,
{
    state.authorize(headers)?;

    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let submission = validate_request(content_type, body)?;

    // Store I/O is blocking; keep it off the async workers.
    let worker = Arc::clone(&state);
    let outcome = tokio::task::spawn_blocking(move || worker.service.upsert(submission))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let (code, event) = match &outcome {
        UpsertOutcome::Created(_) => (StatusCode::CREATED, events::CLIENT_CREATED),
        UpsertOutcome::Updated(_) => (StatusCode::OK, events::CLIENT_STATUS_UPDATED),
    };
    let view = outcome.view().clone();
    let age = view.age.to_string();
    Logger::info(event, &[("id", view.id.as_str()), ("age", age.as_str())]);

    Ok((code, Json(SuccessEnvelope::new(code, view))))
}
