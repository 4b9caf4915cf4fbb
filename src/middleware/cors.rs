//! CORS middleware.

use axum::http::Method;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer allowing `GET` requests from any origin.
pub fn permissive() -> CorsLayer
{
	CorsLayer::new()
		.allow_origin(tower_http::cors::Any)
		.allow_methods([Method::GET, Method::HEAD])
		.allow_headers(tower_http::cors::Any)
}
