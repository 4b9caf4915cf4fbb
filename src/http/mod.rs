//! HTTP plumbing shared by all services.
//!
//! This contains the [`ErrorResponse`] type every handler uses for its error
//! case, extractor wrappers that reject requests with an [`ErrorResponse`],
//! and the router-wide fallback handlers.

pub mod error_response;
pub use error_response::ErrorResponse;

pub mod extract;
pub mod fallback;
