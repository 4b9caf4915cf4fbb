//! This module contains the [`ErrorType`] enum.
//!
//! It represents an exhaustive list of all the error conditions the API might
//! report.

use http::StatusCode;

/// A kind of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType
{
	/// The requested year is not a number, or outside the accepted range.
	InvalidYear,

	/// The requested sort column is unknown.
	InvalidOrderBy,

	/// The requested sort direction is unknown.
	InvalidOrder,

	/// The query string could not be deserialized.
	InvalidQueryString,

	/// Path parameters could not be deserialized.
	InvalidPathParameters,

	/// There is no data for the requested resource.
	NoData,

	/// No route matches the requested path.
	RouteNotFound,

	/// The route exists, but not for the requested method.
	MethodNotAllowed,

	/// The backing database is missing or cannot be opened.
	DatabaseNotFound,

	/// An internal failure occurred.
	Internal,
}

impl ErrorType
{
	/// Every error type.
	pub const ALL: [Self; 10] = [
		Self::InvalidYear,
		Self::InvalidOrderBy,
		Self::InvalidOrder,
		Self::InvalidQueryString,
		Self::InvalidPathParameters,
		Self::NoData,
		Self::RouteNotFound,
		Self::MethodNotAllowed,
		Self::DatabaseNotFound,
		Self::Internal,
	];

	/// The status code for responses of this type.
	pub const fn status(self) -> StatusCode
	{
		match self {
			Self::InvalidYear
			| Self::InvalidOrderBy
			| Self::InvalidOrder
			| Self::InvalidQueryString
			| Self::InvalidPathParameters => StatusCode::BAD_REQUEST,
			Self::NoData | Self::RouteNotFound => StatusCode::NOT_FOUND,
			Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			Self::DatabaseNotFound | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// The `error` field of responses of this type.
	pub const fn title(self) -> &'static str
	{
		match self {
			Self::InvalidYear => "Invalid year",
			Self::InvalidOrderBy => "Invalid order_by parameter",
			Self::InvalidOrder => "Invalid order parameter",
			Self::InvalidQueryString => "Invalid query string",
			Self::InvalidPathParameters => "Invalid path parameters",
			Self::NoData => "No data found",
			Self::RouteNotFound => "Not found",
			Self::MethodNotAllowed => "Method not allowed",
			Self::DatabaseNotFound => "Database not found",
			Self::Internal => "Internal server error",
		}
	}

	/// The `message` used in place of the error's own message, for server
	/// errors.
	pub const fn public_message(self) -> &'static str
	{
		match self {
			Self::DatabaseNotFound => "Please ensure the database file exists",
			_ => "An unexpected error occurred",
		}
	}
}
