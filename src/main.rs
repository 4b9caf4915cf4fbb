use anyhow::Context;
use clap::Parser;
use sales_api::runtime::{self, Config};

mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()>
{
	if let Err(error) = dotenvy::dotenv() {
		if !error.not_found() {
			eprintln!("WARN: Failed to load `.env` file: {error}");
		}
	}

	let config = Config::parse();
	let _guard = logging::init(&config.tracing).context("initialize logging")?;

	runtime::panic_hook::install();

	tracing::debug!(?config, "loaded configuration");

	if cfg!(not(feature = "production")) {
		tracing::warn!("running in development mode");
	}

	sales_api::run(config).await
}
