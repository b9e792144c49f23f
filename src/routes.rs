//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`     - Short link redirect (302)
//! - `GET  /`            - 400, alias missing
//! - `/api/v1/*`         - REST API, see [`crate::api::routes::v1_routes`]
//! - anything else       - 404 / 405 error envelope
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request id** - `x-request-id` kept or generated, echoed on the response
//! - **Tracing** - Structured request/response logging, span carries the id
//! - **Timeout** - Per-request bound; the handler future is dropped on expiry,
//!   cancelling any in-flight storage call
//! - **Panic recovery** - A panicking handler answers `500 internal error`

use std::time::Duration;

use crate::api;
use crate::api::handlers::{
    method_not_allowed_handler, missing_alias_handler, redirect_handler, route_not_found_handler,
};
use crate::api::middleware::{recover, request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on a single request, answered with
///   `408 Request Timeout` when exceeded
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(missing_alias_handler))
        .route("/{alias}", get(redirect_handler))
        .nest("/api/v1", api::routes::v1_routes())
        .fallback(route_not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(recover::layer())
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(tracing::layer())
                .layer(request_id::propagate_layer())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
}
