//! One-shot POST of a client payload

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use crate::observability::{events, Logger};

use super::errors::{SubmitError, SubmitResult};
use super::source::ClientPayload;

/// Fixed request timeout
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to send
#[derive(Debug, Clone)]
pub struct SubmitTarget {
    pub url: String,
    pub auth_header: String,
    pub auth_token: String,
}

/// Sends `payload` once and returns the parsed response envelope.
///
/// Timeouts, connection failures and non-JSON replies are returned as
/// errors. A status other than 200/201 is only logged.
pub async fn submit(target: &SubmitTarget, payload: &ClientPayload) -> SubmitResult<Value> {
    let client = reqwest::Client::builder()
        .timeout(SUBMIT_TIMEOUT)
        .build()
        .map_err(|e| SubmitError::Request(e.to_string()))?;

    let response = client
        .post(&target.url)
        .header(target.auth_header.as_str(), target.auth_token.as_str())
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK && status != StatusCode::CREATED {
        let code = status.as_u16().to_string();
        Logger::warn(events::SUBMIT_RESPONSE, &[("unexpected_status", code.as_str())]);
    }

    let text = response.text().await?;
    let body: Value =
        serde_json::from_str(&text).map_err(|_| SubmitError::InvalidResponse(text.clone()))?;

    log_envelope(&body);
    Ok(body)
}

fn log_envelope(body: &Value) {
    let field = |v: Option<&Value>| match v {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<absent>".to_string(),
    };

    let status = field(body.get("status"));
    let code = field(body.get("code"));
    let message = field(body.get("message"));
    let data = body.get("data");
    let id = field(data.and_then(|d| d.get("id")));
    let fio = field(data.and_then(|d| d.get("FIO")));
    let age = field(data.and_then(|d| d.get("age")));

    Logger::info(
        events::SUBMIT_RESPONSE,
        &[
            ("status", status.as_str()),
            ("code", code.as_str()),
            ("message", message.as_str()),
            ("id", id.as_str()),
            ("FIO", fio.as_str()),
            ("age", age.as_str()),
        ],
    );
}
