//! Envelopes for requests that match no handler.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// `404 {"status": "ERROR", "error": "not found"}` for unknown paths.
pub async fn route_not_found_handler(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// `405 {"status": "ERROR", "error": "method not allowed"}` when the path
/// exists but not for this method.
pub async fn method_not_allowed_handler(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
