//! This module contains OS signal handlers.
//!
//! These are used to shut the HTTP server down gracefully.

use tokio::signal;

/// Resolves when the process receives `SIGINT`, or `SIGTERM` on unix
/// platforms.
#[tracing::instrument(target = "sales_api::runtime")]
pub async fn shutdown()
{
	tokio::select! {
		() = sigint() => {}
		() = sigterm() => {}
	}
}

/// Resolves on `SIGINT` (Ctrl-C).
async fn sigint()
{
	match signal::ctrl_c().await {
		Ok(()) => tracing::warn!("received SIGINT, shutting down"),
		Err(error) => {
			tracing::error!(%error, "failed to listen for SIGINT");
			std::future::pending::<()>().await;
		}
	}
}

/// Resolves on `SIGTERM`.
#[cfg(unix)]
async fn sigterm()
{
	use signal::unix::SignalKind;

	match signal::unix::signal(SignalKind::terminate()) {
		Ok(mut stream) => {
			stream.recv().await;
			tracing::warn!("received SIGTERM, shutting down");
		}
		Err(error) => {
			tracing::error!(%error, "failed to listen for SIGTERM");
			std::future::pending::<()>().await;
		}
	}
}

/// There is no `SIGTERM` outside of unix.
#[cfg(not(unix))]
async fn sigterm()
{
	std::future::pending::<()>().await;
}
