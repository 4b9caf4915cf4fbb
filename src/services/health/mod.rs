//! A very basic service that acts as a healthcheck.
//!
//! It never touches the sales database, so it keeps answering even if the
//! database file is missing.

use std::fmt;

use serde::Serialize;

pub(crate) mod http;

/// A service that simply responds if the API is up.
#[derive(Clone, Copy)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct HealthService {}

impl fmt::Debug for HealthService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("HealthService").finish_non_exhaustive()
	}
}

impl HealthService
{
	/// Create a new [`HealthService`].
	#[tracing::instrument]
	pub fn new() -> Self
	{
		Self {}
	}

	/// Reports the API's health.
	#[tracing::instrument(level = "debug")]
	pub async fn check(&self) -> HealthReport
	{
		HealthReport { status: "healthy" }
	}
}

/// Response body for the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct HealthReport
{
	/// Always `"healthy"` if the API is able to respond.
	#[schema(example = "healthy")]
	pub status: &'static str,
}
