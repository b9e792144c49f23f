//! Handler for deleting a short link.

use axum::{
    Json,
    extract::{Path, State},
};

use super::require_alias;
use crate::api::dto::response::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the link stored under an alias.
///
/// # Endpoint
///
/// `DELETE /api/v1/url/{alias}`
///
/// # Errors
///
/// - 400 if the alias is blank
/// - 404 if the alias is unknown
pub async fn delete_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    let alias = require_alias(&alias)?;

    state.url_service.delete(alias).await?;
    tracing::info!(alias, "url deleted");

    Ok(Json(StatusResponse::ok()))
}
