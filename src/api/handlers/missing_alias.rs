//! Fallback for alias routes hit without an alias segment.

use crate::error::AppError;

/// Always answers `400 {"status": "ERROR", "error": "missing alias"}`.
pub async fn missing_alias_handler() -> AppError {
    AppError::MissingAlias
}
