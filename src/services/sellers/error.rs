//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::http::error_response::{ErrorType, IntoErrorResponse};
use crate::sales::{InvalidSortParams, InvalidYear, Year};
use crate::store::StoreError;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the seller service.
#[derive(Debug, Error)]
pub enum Error
{
	/// The requested year is malformed or out of range.
	#[error(transparent)]
	InvalidYear(#[from] InvalidYear),

	/// The requested sort column or direction is unknown.
	#[error(transparent)]
	InvalidSortParams(#[from] InvalidSortParams),

	/// There were no invoices in the requested year.
	#[error("no sales data found for year {year}")]
	NoSalesForYear
	{
		/// The requested year.
		year: Year,
	},

	/// The sales database could not answer.
	#[error(transparent)]
	Store(#[from] StoreError),
}

impl IntoErrorResponse for Error
{
	fn error_type(&self) -> ErrorType
	{
		match self {
			Self::InvalidYear(_) => ErrorType::InvalidYear,
			Self::InvalidSortParams(InvalidSortParams::OrderBy { .. }) => ErrorType::InvalidOrderBy,
			Self::InvalidSortParams(InvalidSortParams::Order { .. }) => ErrorType::InvalidOrder,
			Self::NoSalesForYear { .. } => ErrorType::NoData,
			Self::Store(source) => source.error_type(),
		}
	}
}
