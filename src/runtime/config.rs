//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the command line or the environment on startup.
//!
//! See the `.env.example` file in the root of the repository for all the
//! relevant variables and example values.

use std::fmt;
use std::net::SocketAddr;
use std::num::{NonZeroU32, ParseIntError};
use std::path::PathBuf;
use std::time::Duration;

/// The API's runtime configuration.
#[derive(Clone, clap::Parser)]
#[command(version, about)]
pub struct Config
{
	/// The address the HTTP server should listen on.
	#[arg(long, env = "SALES_API_ADDR", default_value = "127.0.0.1:5000")]
	pub addr: SocketAddr,

	/// Database settings.
	#[command(flatten)]
	pub database: DatabaseConfig,

	/// Log output settings.
	#[command(flatten)]
	pub tracing: TracingConfig,
}

impl fmt::Debug for Config
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Config")
			.field("addr", &format_args!("{}", self.addr))
			.field("database", &self.database)
			.field("tracing", &self.tracing)
			.finish()
	}
}

/// Configuration for the sales database.
#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseConfig
{
	/// Path to the SQLite database file.
	///
	/// The file is opened read-only and never created.
	#[arg(long = "database-path", env = "SALES_API_DATABASE_PATH", default_value = "data.db")]
	pub path: PathBuf,

	/// Upper bound on open database connections.
	///
	/// Defaults to twice the available parallelism.
	#[arg(long, env = "SALES_API_MAX_CONNECTIONS")]
	pub max_connections: Option<NonZeroU32>,

	/// How many seconds a single query may take before it is abandoned.
	#[arg(
		long,
		env = "SALES_API_QUERY_TIMEOUT",
		default_value = "5",
		value_parser = parse_seconds,
	)]
	pub query_timeout: Duration,
}

/// Configuration for log output.
#[derive(Debug, Clone, clap::Args)]
pub struct TracingConfig
{
	/// Directory to write daily log files into.
	///
	/// File logging is disabled if this is not set.
	#[arg(long, env = "SALES_API_LOG_DIR")]
	pub log_dir: Option<PathBuf>,

	/// Whether to include ANSI escape codes for colors in stderr output.
	#[arg(long = "log-ansi", env = "SALES_API_LOG_ANSI")]
	pub ansi: bool,
}

/// Parses a non-zero number of seconds.
fn parse_seconds(value: &str) -> Result<Duration, ParseSecondsError>
{
	match value.trim().parse::<u64>()? {
		0 => Err(ParseSecondsError::Zero),
		secs => Ok(Duration::from_secs(secs)),
	}
}

/// Error for [`parse_seconds()`].
#[derive(Debug, thiserror::Error)]
enum ParseSecondsError
{
	/// Not a whole number.
	#[error(transparent)]
	Int(#[from] ParseIntError),

	/// A timeout of 0 would fail every query.
	#[error("timeout must be at least 1 second")]
	Zero,
}
