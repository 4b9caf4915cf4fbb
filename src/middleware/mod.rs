//! This module contains the middleware wrapped around every route.
//!
//! Middlewares are implemented as [tower services], configured from
//! [`tower_http`].
//!
//! [tower services]: https://docs.rs/tower/0.4/tower/trait.Service.html

pub(crate) mod logging;
pub(crate) mod panic_handler;
pub(crate) mod cors;
