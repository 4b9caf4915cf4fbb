#![doc = include_str!("../README.md")]
// TODO: remove once https://github.com/tokio-rs/tracing/issues/2912 lands
#![allow(clippy::blocks_in_conditions)]

use std::fmt::Write;
use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::IntoMakeService;
use axum::Router;
use tokio::net::TcpListener;

#[cfg(test)]
mod testing;

pub mod runtime;
pub use runtime::Config;

pub mod http;
pub mod middleware;
pub mod openapi;
pub mod sales;
pub mod services;
pub mod store;

use crate::http::fallback;
use crate::services::{HealthService, SellerService};
use crate::store::{SalesStore, SqliteStore};

/// Prefix under which every route is served a second time.
pub const API_PREFIX: &str = "/api/v1";

#[allow(clippy::missing_docs_in_private_items)]
type Server = axum::serve::Serve<IntoMakeService<Router>, Router>;

/// Run the API.
///
/// This function will not exit until a SIGINT or SIGTERM signal is received.
/// If you want to supply a custom signal for graceful shutdown, use
/// [`run_until()`] instead.
pub async fn run(config: Config) -> anyhow::Result<()>
{
	server(config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(runtime::signals::shutdown())
		.await
		.context("run http server")
}

/// Run the API until a given future completes.
///
/// This function is the same as [`run()`], except that it also waits for the
/// provided `until` future, and shuts down the server when that future
/// resolves.
pub async fn run_until<Until>(config: Config, until: Until) -> anyhow::Result<()>
where
	Until: Future<Output = ()> + Send + 'static,
{
	server(config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(async move {
			tokio::select! {
				() = until => {}
				() = runtime::signals::shutdown() => {}
			}
		})
		.await
		.context("run http server")
}

/// Builds the API's [`Router`] on top of the given store.
///
/// Every route is reachable both at the root and under [`API_PREFIX`].
pub fn router(store: Arc<dyn SalesStore>) -> Router
{
	let api = Router::new()
		.nest("/health", Router::from(HealthService::new()))
		.nest("/sellers", Router::from(SellerService::new(store)))
		.nest("/docs", openapi::Spec::new().router());

	Router::new()
		.merge(api.clone())
		.nest(API_PREFIX, api)
		.fallback(fallback::not_found)
		.layer(middleware::panic_handler::layer())
		.layer(middleware::cors::permissive())
		.layer(middleware::logging::layer!())
}

/// Runs the necessary setup for the API and returns a future that will run the
/// server when polled.
///
/// See [`run()`] and [`run_until()`].
async fn server(config: Config) -> anyhow::Result<Server>
{
	tracing::debug!(addr = %config.addr, "binding TCP socket");

	let tcp_listener = TcpListener::bind(config.addr)
		.await
		.context("bind tcp socket")?;

	serve(tcp_listener, &config).await
}

/// Creates the HTTP server on top of an already bound listener.
async fn serve(tcp_listener: TcpListener, config: &Config) -> anyhow::Result<Server>
{
	let addr = tcp_listener.local_addr().context("get tcp addr")?;

	tracing::info!(%addr, prod = cfg!(feature = "production"), "listening for requests");

	let store = SqliteStore::new(&config.database);

	if store.file_exists().await {
		tracing::info!(path = %config.database.path.display(), "using sales database");
	} else {
		tracing::warn! {
			path = %config.database.path.display(),
			"database file does not exist; sales routes will fail until it does",
		};
	}

	let spec = openapi::Spec::new();
	let mut routes_message = String::from("registering routes:\n");

	for (path, methods) in spec.routes() {
		writeln!(&mut routes_message, "    • {path} => [{methods}]")?;
	}

	tracing::info!("{routes_message}");

	let service = router(Arc::new(store)).into_make_service();

	Ok(axum::serve(tcp_listener, service))
}
