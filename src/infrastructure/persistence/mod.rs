//! SQL repository implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::UrlRepository`]
//! using SQLx runtime-checked queries.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL backend
//! - [`SqliteUrlRepository`] - SQLite backend (file or in-memory)
//!
//! [`Database`] owns the connection pool and picks the backend from the
//! connection string.

mod database;
mod db_error;
pub mod pg_url_repository;
pub mod sqlite_url_repository;

pub use database::{Database, DatabaseSettings, PoolStats};
pub use db_error::{is_unique_violation, map_sqlx_error};
pub use pg_url_repository::PgUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;

use std::future::Future;
use std::time::Duration;

use crate::error::StorageError;

/// Bounds a single query by `deadline`.
///
/// The outer error is the deadline; the inner result is the driver's own
/// outcome so callers can still inspect constraint violations.
pub(crate) async fn with_deadline<T, F>(
    deadline: Duration,
    operation: &'static str,
    query: F,
) -> Result<Result<T, sqlx::Error>, StorageError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    tokio::time::timeout(deadline, query).await.map_err(|_| {
        StorageError::Timeout(format!("{operation} exceeded {}ms", deadline.as_millis()))
    })
}
