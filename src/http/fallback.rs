//! Fallback handlers for requests no route wants to handle.

use axum::extract::OriginalUri;
use axum::http::Method;
use thiserror::Error;

use crate::http::error_response::{ErrorType, IntoErrorResponse};
use crate::http::ErrorResponse;

/// No route matched the request path.
#[derive(Debug, Error)]
#[error("no route matches `{path}`")]
pub struct RouteNotFound
{
	/// The requested path.
	pub path: String,
}

impl IntoErrorResponse for RouteNotFound
{
	fn error_type(&self) -> ErrorType
	{
		ErrorType::RouteNotFound
	}
}

/// A route matched the request path, but it does not support the method.
#[derive(Debug, Error)]
#[error("`{method}` is not supported for `{path}`; only `GET` requests are served")]
pub struct MethodNotAllowed
{
	/// The requested method.
	pub method: Method,

	/// The requested path.
	pub path: String,
}

impl IntoErrorResponse for MethodNotAllowed
{
	fn error_type(&self) -> ErrorType
	{
		ErrorType::MethodNotAllowed
	}
}

/// Router-wide fallback for unmatched paths.
#[tracing::instrument(level = "debug")]
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ErrorResponse
{
	ErrorResponse::from(RouteNotFound { path: uri.path().to_owned() })
}

/// Per-route fallback for unsupported methods.
#[tracing::instrument(level = "debug")]
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ErrorResponse
{
	ErrorResponse::from(MethodNotAllowed { method, path: uri.path().to_owned() })
}
