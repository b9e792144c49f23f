//! Core domain entities.
//!
//! - [`ShortLink`] - A stored alias → URL mapping

pub mod short_link;

pub use short_link::ShortLink;
