//! HTTP handlers for this service.

use axum::extract::State;
use axum::{routing, Json, Router};

use super::{HealthReport, HealthService};
use crate::http::fallback;

impl From<HealthService> for Router
{
	fn from(svc: HealthService) -> Self
	{
		let root = routing::get(get).fallback(fallback::method_not_allowed);

		Router::new().route("/", root).with_state(svc)
	}
}

/// Reports whether the API is up.
#[tracing::instrument]
#[utoipa::path(get, path = "/health", tag = "Health", responses(
  (status = OK, description = "The API is healthy.", body = HealthReport),
))]
pub(crate) async fn get(State(svc): State<HealthService>) -> Json<HealthReport>
{
	Json(svc.check().await)
}
