//! Handler for storing a new short link.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::url::{SaveUrlRequest, SaveUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a requested or generated alias.
///
/// # Endpoint
///
/// `POST /api/v1/url`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com", "alias": "promo1" }
/// ```
///
/// `alias` is optional. The URL gets an `https://` scheme if it has none.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "promo1" }
/// ```
///
/// # Errors
///
/// - 400 on a malformed body, a missing `url`, an invalid alias or URL
/// - 409 if the alias is already taken
/// - 500 if no free alias could be generated or storage failed
pub async fn save_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Result<Json<SaveUrlResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    payload.validate()?;

    let link = state
        .url_service
        .shorten(&payload.url, payload.alias.as_deref())
        .await?;

    tracing::info!(id = link.id, alias = %link.alias, url = %link.url, "url saved");

    Ok(Json(SaveUrlResponse::ok(link.alias)))
}
