//! # Shortlink
//!
//! A small URL shortening service built with Axum and SQLx.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The short link entity and the repository trait
//! - **Application Layer** ([`application`]) - Alias allocation and the URL service
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL/SQLite storage and pool monitoring
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST   /api/v1/url` - store a URL under a requested or generated alias
//! - `GET    /api/v1/url/{alias}` - look up a URL
//! - `DELETE /api/v1/url/{alias}` - delete a link
//! - `GET    /{alias}` - 302 redirect
//! - `GET    /api/v1/health` - storage health check
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./data/shortlink.db"   # or DATABASE_URL=postgres://...
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod shutdown;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasAllocator, AllocatorSettings, UrlService};
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::{Database, DatabaseSettings};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
    pub use crate::utils::alias_generator::{AliasGenerator, Alphabet, RandomAliasGenerator};
}
