//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use super::{is_unique_violation, with_deadline};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for alias → URL rows.
///
/// Every query runs under `query_timeout`, independent of the pool's
/// acquire timeout.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
    query_timeout: Duration,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn init_schema(&self) -> Result<(), AppError> {
        with_deadline(
            self.query_timeout,
            "init_schema",
            sqlx::query(
                r#"
                CREATE TABLE IF NOT EXISTS urls (
                    id    BIGSERIAL PRIMARY KEY,
                    alias TEXT NOT NULL UNIQUE,
                    url   TEXT NOT NULL
                )
                "#,
            )
            .execute(self.pool.as_ref()),
        )
        .await??;

        Ok(())
    }

    async fn save(&self, alias: &str, url: &str) -> Result<i64, AppError> {
        let result = with_deadline(
            self.query_timeout,
            "save",
            sqlx::query_scalar::<_, i64>(
                "INSERT INTO urls (alias, url) VALUES ($1, $2) RETURNING id",
            )
            .bind(alias)
            .bind(url)
            .fetch_one(self.pool.as_ref()),
        )
        .await?;

        match result {
            Ok(id) => Ok(id),
            Err(e) if is_unique_violation(&e) => Err(AppError::AliasExists(alias.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, alias: &str) -> Result<String, AppError> {
        let url = with_deadline(
            self.query_timeout,
            "get",
            sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = $1")
                .bind(alias)
                .fetch_optional(self.pool.as_ref()),
        )
        .await??;

        url.ok_or_else(|| AppError::UrlNotFound(alias.to_string()))
    }

    async fn delete(&self, alias: &str) -> Result<(), AppError> {
        let result = with_deadline(
            self.query_timeout,
            "delete",
            sqlx::query("DELETE FROM urls WHERE alias = $1")
                .bind(alias)
                .execute(self.pool.as_ref()),
        )
        .await??;

        if result.rows_affected() == 0 {
            return Err(AppError::UrlNotFound(alias.to_string()));
        }

        Ok(())
    }

    async fn exists(&self, alias: &str) -> Result<bool, AppError> {
        let exists = with_deadline(
            self.query_timeout,
            "exists",
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM urls WHERE alias = $1)")
                .bind(alias)
                .fetch_one(self.pool.as_ref()),
        )
        .await??;

        Ok(exists)
    }

    async fn ping(&self) -> Result<(), AppError> {
        with_deadline(
            self.query_timeout,
            "ping",
            sqlx::query("SELECT 1").execute(self.pool.as_ref()),
        )
        .await??;

        Ok(())
    }
}
