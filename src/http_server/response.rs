//! # Response Envelopes

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Message carried by every successful client response
pub const SUCCESS_MESSAGE: &str = "Data processed successfully";

/// `{"status":"success","code":...,"message":...,"data":...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub status: String,
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> SuccessEnvelope<T> {
    pub fn new(code: StatusCode, data: T) -> Self {
        Self {
            status: "success".to_string(),
            code: code.as_u16(),
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

/// `{"status":"error","code":...,"message":...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub code: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            code: code.as_u16(),
            message: message.into(),
        }
    }
}
