//! This module contains a configured [`CatchPanicLayer`], which will catch
//! panics and produce a proper HTTP response from them.
//!
//! Normally, if an HTTP handler panics, the connection will simply be closed.
//! With this layer the client gets a regular 500 response instead, and the
//! server keeps going.

use std::any::Any;

use axum::response::IntoResponse;
use thiserror::Error;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::error_response::{ErrorType, IntoErrorResponse};
use crate::http::ErrorResponse;

/// Creates a middleware layer for catching panics and turning them into
/// responses.
pub fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// A custom panic handler for [`CatchPanicLayer`].
#[derive(Debug, Clone, Copy)]
pub struct PanicHandler;

/// An HTTP handler panicked.
#[derive(Debug, Error)]
#[error("handler panicked: {}", .message.unwrap_or("<unknown>"))]
struct HandlerPanicked<'a>
{
	/// The panic payload, if it was a string.
	message: Option<&'a str>,
}

impl IntoErrorResponse for HandlerPanicked<'_>
{
	fn error_type(&self) -> ErrorType
	{
		ErrorType::Internal
	}
}

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	#[tracing::instrument(target = "sales_api::http", name = "panic_handler", skip_all)]
	fn response_for_panic(
		&mut self,
		payload: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let message = payload
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| payload.downcast_ref::<String>().map(String::as_str));

		ErrorResponse::from(HandlerPanicked { message }).into_response()
	}
}
