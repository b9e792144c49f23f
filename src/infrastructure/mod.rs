//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and SQLite repository implementations
//! - [`pool_monitor`] - Periodic connection-pool statistics

pub mod persistence;
pub mod pool_monitor;
