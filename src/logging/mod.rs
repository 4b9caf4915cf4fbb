//! Log-capturing facilities.

use anyhow::Context;
use sales_api::runtime::TracingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod stderr;
mod files;

/// Filter directives used if `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "sales_api=info,warn";

/// Initializes [`tracing-subscriber`].
///
/// NOTE: the returned [`WorkerGuard`] will perform cleanup for the tracing
///       layer that emits logs to files, which means it has to stay alive
///       until the program exits!
pub fn init(config: &TracingConfig) -> anyhow::Result<Option<WorkerGuard>>
{
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let (files, guard) = match &config.log_dir {
		None => (None, None),
		Some(log_dir) => {
			let (layer, guard) = files::layer(log_dir).context("initialize files layer")?;
			(Some(layer), Some(guard))
		}
	};

	let layer = Layer::and_then(stderr::layer(config.ansi), files);

	tracing_subscriber::registry()
		.with(layer.with_filter(filter))
		.try_init()
		.context("install global subscriber")?;

	tracing::info!(log_dir = ?config.log_dir, "initialized logging");

	Ok(guard)
}
