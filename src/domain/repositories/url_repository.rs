//! Repository trait for alias → URL storage.

use crate::error::AppError;
use async_trait::async_trait;

/// Persistence gateway for short links.
///
/// The alias column carries a unique constraint; that constraint, not any
/// read-before-write check, is what guarantees alias uniqueness.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates the `urls` table and its unique index if they are missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn init_schema(&self) -> Result<(), AppError>;

    /// Inserts a new alias → URL row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already taken.
    /// Returns [`AppError::Storage`] on any other database error.
    async fn save(&self, alias: &str, url: &str) -> Result<i64, AppError>;

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] if no row matches.
    /// Returns [`AppError::Storage`] on database errors.
    async fn get(&self, alias: &str) -> Result<String, AppError>;

    /// Removes the row stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] if nothing was deleted.
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, alias: &str) -> Result<(), AppError>;

    /// Reports whether `alias` is taken. Advisory only: the answer can be
    /// stale by the time a subsequent `save` runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn exists(&self, alias: &str) -> Result<bool, AppError>;

    /// Cheap round-trip used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backend cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
