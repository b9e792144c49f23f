//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete;
pub mod fallback;
pub mod get;
pub mod health;
pub mod missing_alias;
pub mod redirect;
pub mod save;

pub use delete::delete_url_handler;
pub use fallback::{method_not_allowed_handler, route_not_found_handler};
pub use get::get_url_handler;
pub use health::health_handler;
pub use missing_alias::missing_alias_handler;
pub use redirect::redirect_handler;
pub use save::save_url_handler;

use crate::error::AppError;

/// Rejects an empty or whitespace-only path alias.
pub(crate) fn require_alias(alias: &str) -> Result<&str, AppError> {
    if alias.trim().is_empty() {
        return Err(AppError::MissingAlias);
    }
    Ok(alias)
}
