//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and alias allocation. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::alias_allocator::AliasAllocator`] - Client alias validation and random alias allocation
//! - [`services::url_service::UrlService`] - Save, resolve and delete short links

pub mod services;
