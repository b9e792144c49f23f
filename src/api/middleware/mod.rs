//! HTTP middleware for request processing.
//!
//! - [`request_id`] - `x-request-id` assignment and propagation
//! - [`tracing`] - Request spans and response logging
//! - [`recover`] - Panic to `500` envelope

pub mod recover;
pub mod request_id;
pub mod tracing;
