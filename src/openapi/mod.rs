//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI
//! specification from code. The [`Spec`] struct in this module lists out all
//! the relevant types, routes, and other metadata that will be included in the
//! spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use axum::{routing, Json, Router};
use itertools::Itertools;
use utoipa::OpenApi;

use crate::http::fallback;

/// The API's OpenAPI description.
#[derive(Debug, Clone, OpenApi)]
#[openapi(
  info(
    title = "Sales API",
    description = "Read-only access to aggregated sales figures.",
  ),
  servers(
    (url = "/", description = "unversioned"),
    (url = "/api/v1", description = "version 1"),
  ),
  paths(
    crate::services::health::http::get,
    crate::services::sellers::http::get_top_for_year,
    crate::services::sellers::http::get_top,
  ),
  components(
    schemas(
      crate::sales::TopSeller,
      crate::sales::SalesAggregate,
      crate::http::ErrorResponse,
      crate::services::health::HealthReport,
    ),
  ),
  tags(
    (name = "Sellers", description = "Sales rep rankings"),
    (name = "Health", description = "Liveness checks"),
  ),
)]
pub struct Spec(utoipa::openapi::OpenApi);

impl Spec
{
	/// Creates a new [`Spec`].
	pub fn new() -> Self
	{
		Self(Self::openapi())
	}

	/// Returns an iterator over the registered API routes and their allowed
	/// HTTP methods.
	pub fn routes(&self) -> impl Iterator<Item = (&str, String)>
	{
		self.0.paths.paths.iter().map(|(path, item)| {
			let methods = item
				.operations
				.keys()
				.map(|method| format!("{method:?}").to_uppercase())
				.join(", ");

			(path.as_str(), methods)
		})
	}

	/// Generates a JSON representation of this OpenAPI spec.
	pub fn as_json(&self) -> serde_json::Result<String>
	{
		self.0.to_pretty_json()
	}

	/// Creates a [`Router`] serving this spec at `/openapi.json`.
	pub fn router(self) -> Router
	{
		let spec = self.0;
		let get = routing::get(move || {
			let spec = spec.clone();
			async move { Json(spec) }
		})
		.fallback(fallback::method_not_allowed);

		Router::new().route("/openapi.json", get)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;

	#[test]
	fn lists_every_route() -> color_eyre::Result<()>
	{
		let spec = Spec::new();
		let routes = spec.routes().collect::<Vec<_>>();

		testing::assert_eq!(
			routes,
			[
				("/health", String::from("GET")),
				("/sellers/{year}/top", String::from("GET")),
				("/sellers/top", String::from("GET")),
			]
		);

		Ok(())
	}

	#[test]
	fn serializes() -> color_eyre::Result<()>
	{
		let json = Spec::new().as_json()?;
		let value = serde_json::from_str::<serde_json::Value>(&json)?;

		testing::assert!(value["components"]["schemas"]["SalesAggregate"].is_object());
		testing::assert!(value["components"]["schemas"]["TopSeller"].is_object());
		testing::assert!(value["paths"]["/sellers/top"]["get"]["parameters"].is_array());

		Ok(())
	}
}
