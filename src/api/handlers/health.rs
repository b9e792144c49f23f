//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse};
use crate::api::dto::response::ResponseStatus;
use crate::state::AppState;

/// Driver details stay in the server log.
const STORAGE_UNAVAILABLE: &str = "storage unavailable";

/// Returns service health with a storage check.
///
/// # Endpoint
///
/// `GET /api/v1/health`
///
/// # Response Codes
///
/// - **200 OK**: storage answered
/// - **503 Service Unavailable**: storage check failed, `storage.message` is
///   always `"storage unavailable"`
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "version": "0.1.0",
///   "storage": { "status": "ok" }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let healthy = storage.status == "ok";

    let response = HealthResponse {
        status: if healthy {
            ResponseStatus::Ok
        } else {
            ResponseStatus::Error
        },
        version: env!("CARGO_PKG_VERSION"),
        storage,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_storage(state: &AppState) -> CheckStatus {
    match state.url_service.check_storage().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "storage health check failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some(STORAGE_UNAVAILABLE.to_string()),
            }
        }
    }
}
