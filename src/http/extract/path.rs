//! This module contains the [`Path`] extractor, a wrapper around
//! [`axum::extract::Path`] with a custom error response.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::error_response::{ErrorType, IntoErrorResponse};
use crate::http::ErrorResponse;

#[allow(clippy::missing_docs_in_private_items)]
mod base
{
	pub use axum::extract::rejection::PathRejection;
	pub use axum::extract::Path;
}

/// An extractor for URI segment captures.
///
/// This wraps [`axum::extract::Path`] exactly, but produces different error
/// responses.
#[derive(Debug, FromRequestParts)]
#[from_request(via(base::Path), rejection(PathRejection))]
pub struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct PathRejection(#[from] pub base::PathRejection);

impl IntoResponse for PathRejection
{
	fn into_response(self) -> Response
	{
		ErrorResponse::from(self).into_response()
	}
}

impl IntoErrorResponse for PathRejection
{
	fn error_type(&self) -> ErrorType
	{
		match self.0 {
			// Routes and handlers disagree about which parameters exist.
			base::PathRejection::MissingPathParams(_) => ErrorType::Internal,
			_ => ErrorType::InvalidPathParameters,
		}
	}
}
