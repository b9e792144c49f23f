//! Helpers shared by the service layer.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`url_normalizer`] - URL normalization and validation

pub mod alias_generator;
pub mod url_normalizer;
