//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, get_url_handler, health_handler, method_not_allowed_handler,
    missing_alias_handler, save_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a URL under a requested or generated alias
/// - `GET    /url/{alias}`  - Look up the stored URL
/// - `DELETE /url/{alias}`  - Delete the link
/// - `GET    /url/`         - 400, alias missing
/// - `DELETE /url/`         - 400, alias missing
/// - `GET    /health`       - Storage health check
///
/// A known path with an unsupported method answers `405 method not allowed`.
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_url_handler))
        .route(
            "/url/",
            get(missing_alias_handler).delete(missing_alias_handler),
        )
        .route(
            "/url/{alias}",
            get(get_url_handler).delete(delete_url_handler),
        )
        .route("/health", get(health_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
}
