//! This module contains the [`IntoErrorResponse`] trait.
//!
//! It defines the contract for how an error type can be turned into an HTTP
//! error response.

use std::convert;

use super::ErrorType;

/// A trait for creating [`ErrorResponse`]s from error types.
///
/// The error's [`Display`] implementation is used as the response message,
/// unless the [`ErrorType`] is a server error.
///
/// [`ErrorResponse`]: super::ErrorResponse
/// [`Display`]: std::fmt::Display
pub trait IntoErrorResponse: std::error::Error
{
	/// Returns the error type for this error.
	fn error_type(&self) -> ErrorType;
}

impl IntoErrorResponse for convert::Infallible
{
	fn error_type(&self) -> ErrorType
	{
		match *self {}
	}
}
