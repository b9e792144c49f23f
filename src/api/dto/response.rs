//! Uniform response envelope shared by every endpoint.

use serde::Serialize;

/// Outcome marker carried in every JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Error envelope: `{"status": "ERROR", "error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: error.into(),
        }
    }
}

/// Bare success envelope: `{"status": "OK"}`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: ResponseStatus,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
        }
    }
}
