//! Handler for looking up a stored URL.

use axum::{
    Json,
    extract::{Path, State},
};

use super::require_alias;
use crate::api::dto::url::GetUrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the URL stored under an alias.
///
/// # Endpoint
///
/// `GET /api/v1/url/{alias}`
///
/// # Errors
///
/// - 400 if the alias is blank
/// - 404 if the alias is unknown
pub async fn get_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GetUrlResponse>, AppError> {
    let alias = require_alias(&alias)?;

    let url = state.url_service.resolve(alias).await?;
    tracing::debug!(alias, url = %url, "url resolved");

    Ok(Json(GetUrlResponse::ok(url)))
}
