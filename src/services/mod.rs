//! API services.
//!
//! These contain the core business logic.
//!
//! Every service maps to an HTTP route, so each one has an `http` module
//! containing the handlers and an `Into<axum::Router>` implementation.

pub mod health;
pub use health::HealthService;

pub mod sellers;
pub use sellers::SellerService;
