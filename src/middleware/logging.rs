//! This module contains configuration for the [`Trace`] middleware from
//! [`tower_http`].
//!
//! The resulting type contains unique function types, and as such cannot be
//! spelled out in code. This is why we export a macro instead, which will just
//! expand to the final expression. The `pub(crate)` functions in this module
//! only exist for that macro, and are marked as `#[doc(hidden)]`.
//!
//! [`Trace`]: tower_http::trace::Trace

use std::time::Duration;

use axum::extract::{MatchedPath, Request};
use axum::response::Response;
use tower_http::classify::ServerErrorsFailureClass;
use uuid::Uuid;

/// Creates a middleware that will log incoming HTTP requests.
///
/// Every request gets its own span with a unique (time-ordered) ID, so all
/// events emitted while handling it can be correlated.
macro_rules! layer {
	() => {
		tower_http::trace::TraceLayer::new_for_http()
			.make_span_with($crate::middleware::logging::make_span)
			.on_request(())
			.on_response($crate::middleware::logging::on_response)
			.on_failure($crate::middleware::logging::on_failure)
	};
}

pub(crate) use layer;

#[doc(hidden)]
pub(crate) fn make_span(request: &Request) -> tracing::Span
{
	let route = request
		.extensions()
		.get::<MatchedPath>()
		.map_or("<fallback>", MatchedPath::as_str);

	tracing::info_span! {
		target: "sales_api::http",
		"request",
		request.id = %Uuid::now_v7(),
		request.method = %request.method(),
		request.uri = %request.uri(),
		request.route = route,
		response.status = tracing::field::Empty,
		latency = tracing::field::Empty,
	}
}

#[doc(hidden)]
pub(crate) fn on_response(response: &Response, latency: Duration, span: &tracing::Span)
{
	span.record("response.status", response.status().as_u16())
		.record("latency", format_args!("{latency:?}"));

	tracing::info!(target: "sales_api::http", "finished request");
}

#[doc(hidden)]
pub(crate) fn on_failure(
	failure: ServerErrorsFailureClass,
	_latency: Duration,
	_span: &tracing::Span,
)
{
	match failure {
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(target: "sales_api::http", %error, "request failed");
		}
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::error!(target: "sales_api::http", %status, "request failed");
		}
	}
}
