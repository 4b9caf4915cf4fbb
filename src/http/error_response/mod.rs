//! Uniform HTTP error responses.
//!
//! Every failure the API reports has the same JSON shape:
//!
//! ```json
//! { "error": "No data found", "message": "no sales data found for year 2011" }
//! ```
//!
//! `error` is a short title describing the kind of problem, `message`
//! describes this particular occurrence. The [`ErrorResponse`] type
//! implements [`IntoResponse`], and can be created from any error type that
//! implements [`IntoErrorResponse`].
//!
//! Server errors never leak their details to the caller. Their message is
//! replaced by a generic one, and the original error is logged instead.

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub(crate) mod error_type;
pub use error_type::ErrorType;

mod into_error_response;
pub use into_error_response::IntoErrorResponse;

/// The body of every error response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse
{
	/// The HTTP status code the response should have.
	#[serde(skip)]
	status: http::StatusCode,

	/// Short, human-readable, description of the problem type.
	#[schema(example = "No data found")]
	error: &'static str,

	/// Human-readable error message describing this particular problem.
	#[schema(example = "no sales data found for year 2011")]
	message: String,
}

impl<E> From<E> for ErrorResponse
where
	E: IntoErrorResponse,
{
	#[track_caller]
	fn from(error: E) -> Self
	{
		let loc = Location::caller();
		let error_type = error.error_type();
		let status = error_type.status();
		let title = error_type.title();

		let message = if status.is_server_error() {
			tracing::error!(%loc, ?error, "{error}");
			error_type.public_message().to_owned()
		} else {
			tracing::debug!(%loc, ?error, "creating error response");
			error.to_string()
		};

		Self { status, error: title, message }
	}
}

impl IntoResponse for ErrorResponse
{
	fn into_response(self) -> Response
	{
		(self.status, Json(self)).into_response()
	}
}
