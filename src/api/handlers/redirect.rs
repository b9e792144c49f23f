//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use super::require_alias;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found`. An unknown alias yields the 404 error envelope
/// without a `Location` header. A stored URL that cannot be sent as a header
/// yields the 400 `invalid URL format` envelope instead of a bare 302.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alias = require_alias(&alias)?;

    let url = state.url_service.resolve(alias).await?;
    let location = HeaderValue::try_from(url.as_str()).map_err(|_| {
        tracing::warn!(alias, url = %url, "stored url is not a valid Location header");
        AppError::InvalidUrl(url.clone())
    })?;
    tracing::debug!(alias, url = %url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
