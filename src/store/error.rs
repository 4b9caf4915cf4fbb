//! The errors that can occur when reading from a [`SalesStore`].
//!
//! [`SalesStore`]: super::SalesStore

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::http::error_response::{ErrorType, IntoErrorResponse};

/// Type alias with a default `Err` type of [`StoreError`].
pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// SQLite result code for "unable to open the database file".
const SQLITE_CANTOPEN: i32 = 14;

/// SQLite result code for "file is not a database".
const SQLITE_NOTADB: i32 = 26;

/// The errors that can occur when reading from the store.
#[derive(Debug, Error)]
pub enum StoreError
{
	/// The database file does not exist.
	#[error("database file `{}` does not exist", path.display())]
	Missing
	{
		/// Where the database file was expected.
		path: PathBuf,
	},

	/// The database exists, but no connection could be established.
	#[error("database is unavailable: {0}")]
	Unavailable(#[source] sqlx::Error),

	/// A query did not finish in time.
	#[error("query did not complete within {0:?}")]
	Timeout(Duration),

	/// Any other database failure.
	#[error("query failed: {0}")]
	Query(#[source] sqlx::Error),
}

impl StoreError
{
	/// Whether this error means the store cannot be reached at all, as
	/// opposed to a single query failing.
	pub const fn is_unavailable(&self) -> bool
	{
		matches!(self, Self::Missing { .. } | Self::Unavailable(_))
	}
}

impl From<sqlx::Error> for StoreError
{
	fn from(error: sqlx::Error) -> Self
	{
		let unavailable = match &error {
			sqlx::Error::Io(_)
			| sqlx::Error::PoolTimedOut
			| sqlx::Error::PoolClosed
			| sqlx::Error::WorkerCrashed => true,
			sqlx::Error::Database(error) => error
				.code()
				.and_then(|code| code.parse::<i32>().ok())
				// extended result codes keep the primary code in the low byte
				.is_some_and(|code| matches!(code & 0xff, SQLITE_CANTOPEN | SQLITE_NOTADB)),
			_ => false,
		};

		if unavailable {
			Self::Unavailable(error)
		} else {
			Self::Query(error)
		}
	}
}

impl IntoErrorResponse for StoreError
{
	fn error_type(&self) -> ErrorType
	{
		if self.is_unavailable() {
			ErrorType::DatabaseNotFound
		} else {
			ErrorType::Internal
		}
	}
}
