//! DTOs for the `/api/v1/url` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::response::ResponseStatus;

/// Request to store a URL under an alias.
///
/// `url` defaults to empty when absent so that a missing field is reported by
/// validation with a per-field message instead of a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    /// Target URL. A scheme is added during normalization if missing.
    #[serde(default)]
    #[validate(length(min = 1, message = "field url is required"))]
    pub url: String,

    /// Client-chosen alias. Generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

/// `{"status": "OK", "alias": "..."}`
#[derive(Debug, Serialize)]
pub struct SaveUrlResponse {
    pub status: ResponseStatus,
    pub alias: String,
}

impl SaveUrlResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: ResponseStatus::Ok,
            alias,
        }
    }
}

/// `{"status": "OK", "url": "..."}`
#[derive(Debug, Serialize)]
pub struct GetUrlResponse {
    pub status: ResponseStatus,
    pub url: String,
}

impl GetUrlResponse {
    pub fn ok(url: String) -> Self {
        Self {
            status: ResponseStatus::Ok,
            url,
        }
    }
}
