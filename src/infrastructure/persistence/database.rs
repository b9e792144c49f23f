//! Connection pool ownership and backend selection.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use super::{PgUrlRepository, SqliteUrlRepository};
use crate::config::Config;
use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;

/// Pool settings shared by both backends.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl DatabaseSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            url: config.database_url.clone(),
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            acquire_timeout: Duration::from_secs(config.db_connect_timeout),
            idle_timeout: Some(Duration::from_secs(config.db_idle_timeout)),
            max_lifetime: Some(Duration::from_secs(config.db_max_lifetime)),
        }
    }
}

/// Point-in-time pool counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
}

/// Connected pool for one of the supported backends.
///
/// Cloning is cheap: both pool types are reference counted internally.
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    /// Connects to the backend named by the URL scheme.
    ///
    /// `postgres://` and `postgresql://` select PostgreSQL, `sqlite:` selects
    /// SQLite. An in-memory SQLite database is pinned to a single connection
    /// that never expires, otherwise every new connection would see an
    /// empty database.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StorageError> {
        let url = settings.url.as_str();

        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .min_connections(settings.min_connections)
                .acquire_timeout(settings.acquire_timeout)
                .idle_timeout(settings.idle_timeout)
                .max_lifetime(settings.max_lifetime)
                .connect(url)
                .await?;

            return Ok(Self::Postgres(pool));
        }

        if url.starts_with("sqlite:") {
            let options = SqliteConnectOptions::from_str(url)?
                .create_if_missing(true)
                .busy_timeout(settings.acquire_timeout);

            let in_memory = is_in_memory(url);
            if !in_memory {
                let parent = options.get_filename().parent().map(|p| p.to_path_buf());
                if let Some(parent) = parent
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(&parent).map_err(|e| {
                        StorageError::Unavailable(format!(
                            "cannot create {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }

            let pool = if in_memory {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .acquire_timeout(settings.acquire_timeout)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            } else {
                SqlitePoolOptions::new()
                    .max_connections(settings.max_connections)
                    .min_connections(settings.min_connections.min(settings.max_connections))
                    .acquire_timeout(settings.acquire_timeout)
                    .idle_timeout(settings.idle_timeout)
                    .max_lifetime(settings.max_lifetime)
                    .connect_with(options)
                    .await?
            };

            return Ok(Self::Sqlite(pool));
        }

        Err(StorageError::Unsupported(format!(
            "expected a postgres:// or sqlite: connection string, got scheme '{}'",
            url.split(':').next().unwrap_or_default()
        )))
    }

    /// Backend name for logs.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Builds the URL repository for this backend.
    pub fn url_repository(&self, query_timeout: Duration) -> Arc<dyn UrlRepository> {
        match self {
            Self::Postgres(pool) => {
                Arc::new(PgUrlRepository::new(Arc::new(pool.clone()), query_timeout))
            }
            Self::Sqlite(pool) => Arc::new(SqliteUrlRepository::new(
                Arc::new(pool.clone()),
                query_timeout,
            )),
        }
    }

    pub fn stats(&self) -> PoolStats {
        match self {
            Self::Postgres(pool) => PoolStats {
                size: pool.size(),
                idle: pool.num_idle(),
            },
            Self::Sqlite(pool) => PoolStats {
                size: pool.size(),
                idle: pool.num_idle(),
            },
        }
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str) -> DatabaseSettings {
        DatabaseSettings {
            url: url.to_string(),
            max_connections: 4,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(2),
            idle_timeout: None,
            max_lifetime: None,
        }
    }

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:links?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://./data/links.db"));
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_scheme() {
        let err = Database::connect(&settings("mysql://localhost/links"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_connect_in_memory_sqlite() {
        let db = Database::connect(&settings("sqlite::memory:")).await.unwrap();

        assert_eq!(db.backend(), "sqlite");
        assert_eq!(db.stats().size, 1);

        let repo = db.url_repository(Duration::from_secs(1));
        repo.init_schema().await.unwrap();
        repo.ping().await.unwrap();

        db.close().await;
    }
}
