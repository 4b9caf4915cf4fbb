//! A [`SalesStore`] backed by a SQLite database file.

use std::fs::Metadata;
use std::future::Future;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use std::{fmt, io, mem, thread};

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, QueryBuilder, Sqlite};
use tokio::time;

use super::{queries, Result, SalesStore, StoreError};
use crate::runtime::DatabaseConfig;
use crate::sales::{SalesAggregate, SortParams, TopSeller, Year};

/// A read-only [`SalesStore`] over a SQLite database.
///
/// Connections are opened lazily, so creating a store never fails, even if
/// the database file does not exist yet.
///
/// SQLite keeps reading an unlinked file through connections that are already
/// open. Before every query the store therefore checks that the file still
/// exists, and replaces its pool if the file at `path` is no longer the one
/// the pool's connections were opened on.
#[derive(Clone)]
pub struct SqliteStore
{
	/// The current connection pool.
	connections: Arc<Mutex<Connections>>,

	/// The database file, if the pool was opened from one.
	file: Option<Arc<DatabaseFile>>,

	/// How long a single query may take, including waiting for a connection.
	query_timeout: Duration,
}

/// A pool and the file its connections read from.
struct Connections
{
	/// Connection pool.
	pool: Pool<Sqlite>,

	/// Identity of the database file when the pool was last used.
	file_id: Option<FileId>,
}

/// Everything needed to open a new pool on a database file.
#[derive(Debug)]
struct DatabaseFile
{
	/// Path to the file.
	path: PathBuf,

	/// Options for every connection.
	connect_options: SqliteConnectOptions,

	/// Upper bound on open connections per pool.
	max_connections: u32,

	/// How long to wait for a free connection.
	acquire_timeout: Duration,
}

impl DatabaseFile
{
	/// Creates a pool that has not opened any connections yet.
	fn lazy_pool(&self) -> Pool<Sqlite>
	{
		SqlitePoolOptions::new()
			.max_connections(self.max_connections)
			.acquire_timeout(self.acquire_timeout)
			.connect_lazy_with(self.connect_options.clone())
	}
}

/// Identifies a file independently of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileId(u64, u64);

impl FileId
{
	/// Device and inode number.
	#[cfg(unix)]
	fn of(metadata: &Metadata) -> Self
	{
		use std::os::unix::fs::MetadataExt;

		Self(metadata.dev(), metadata.ino())
	}

	/// Length and modification time, in nanoseconds.
	#[cfg(not(unix))]
	fn of(metadata: &Metadata) -> Self
	{
		let modified = metadata
			.modified()
			.ok()
			.and_then(|modified| modified.duration_since(std::time::UNIX_EPOCH).ok())
			.map_or(0, |modified| u64::try_from(modified.as_nanos()).unwrap_or(u64::MAX));

		Self(metadata.len(), modified)
	}
}

impl fmt::Debug for SqliteStore
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("SqliteStore")
			.field("path", &self.file.as_ref().map(|file| &file.path))
			.field("query_timeout", &self.query_timeout)
			.finish_non_exhaustive()
	}
}

impl SqliteStore
{
	/// Creates a new [`SqliteStore`] for the database file described by
	/// `config`.
	///
	/// Must be called from within a Tokio runtime.
	pub fn new(config: &DatabaseConfig) -> Self
	{
		let connect_options = SqliteConnectOptions::new()
			.filename(&config.path)
			.read_only(true)
			.create_if_missing(false);

		let file = DatabaseFile {
			path: config.path.clone(),
			connect_options,
			max_connections: config
				.max_connections
				.map_or_else(max_connections, NonZeroU32::get),
			acquire_timeout: config.query_timeout,
		};

		let connections = Connections { pool: file.lazy_pool(), file_id: None };

		Self {
			connections: Arc::new(Mutex::new(connections)),
			file: Some(Arc::new(file)),
			query_timeout: config.query_timeout,
		}
	}

	/// Creates a new [`SqliteStore`] from an existing pool.
	///
	/// The pool is used as-is; there is no file to check for before queries.
	pub fn from_pool(pool: Pool<Sqlite>, query_timeout: Duration) -> Self
	{
		let connections = Connections { pool, file_id: None };

		Self { connections: Arc::new(Mutex::new(connections)), file: None, query_timeout }
	}

	/// Checks whether the database file currently exists.
	///
	/// Always `true` for stores created with [`SqliteStore::from_pool()`].
	pub async fn file_exists(&self) -> bool
	{
		match &self.file {
			None => true,
			Some(file) => tokio::fs::try_exists(&file.path).await.unwrap_or(false),
		}
	}

	/// Returns the pool to run the next query on.
	///
	/// If the database file was replaced since the last query, the old pool is
	/// closed and a new one takes its place.
	async fn pool(&self) -> Result<Pool<Sqlite>>
	{
		let Some(file) = &self.file else {
			return Ok(self.lock_connections().pool.clone());
		};

		let metadata = match tokio::fs::metadata(&file.path).await {
			Ok(metadata) => metadata,
			Err(error) if error.kind() == io::ErrorKind::NotFound => {
				return Err(StoreError::Missing { path: file.path.clone() });
			}
			Err(error) => return Err(StoreError::from(sqlx::Error::Io(error))),
		};

		let file_id = FileId::of(&metadata);
		let mut connections = self.lock_connections();

		if connections.file_id.is_some_and(|known| known != file_id) {
			tracing::info!(path = %file.path.display(), "database file was replaced, reconnecting");

			let stale = mem::replace(&mut connections.pool, file.lazy_pool());

			tokio::spawn(async move { stale.close().await });
		}

		connections.file_id = Some(file_id);

		Ok(connections.pool.clone())
	}

	/// Locks the current pool.
	fn lock_connections(&self) -> std::sync::MutexGuard<'_, Connections>
	{
		self.connections
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
	}

	/// Acquires a connection from the current pool.
	async fn acquire(&self) -> Result<PoolConnection<Sqlite>>
	{
		let pool = self.pool().await?;

		Ok(pool.acquire().await?)
	}

	/// Runs `query`, failing with [`StoreError::Timeout`] if it takes longer
	/// than the configured timeout.
	async fn with_timeout<F, T>(&self, query: F) -> Result<T>
	where
		F: Future<Output = Result<T>>,
	{
		time::timeout(self.query_timeout, query)
			.await
			.map_err(|_| StoreError::Timeout(self.query_timeout))?
	}
}

#[async_trait]
impl SalesStore for SqliteStore
{
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	async fn top_seller_for_year(&self, year: Year) -> Result<Option<TopSeller>>
	{
		self.with_timeout(async {
			let mut conn = self.acquire().await?;
			let top_seller = sqlx::query_as::<_, TopSeller>(queries::TOP_SELLER_FOR_YEAR)
				.bind(year.to_string())
				.fetch_optional(&mut *conn)
				.await?;

			Ok(top_seller)
		})
		.await
	}

	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	async fn all_top_sellers(&self, sort: SortParams) -> Result<Vec<SalesAggregate>>
	{
		self.with_timeout(async {
			let mut conn = self.acquire().await?;
			let mut query = QueryBuilder::<Sqlite>::new(queries::ALL_TOP_SELLERS);

			query.push(queries::order_clause(sort));

			let top_sellers = query
				.build_query_as::<SalesAggregate>()
				.fetch_all(&mut *conn)
				.await?;

			Ok(top_sellers)
		})
		.await
	}
}

/// The default maximum number of pool connections.
fn max_connections() -> u32
{
	let available = thread::available_parallelism().map_or(1, |n| n.get());

	u32::try_from(available.saturating_mul(2)).unwrap_or(u32::MAX)
}
