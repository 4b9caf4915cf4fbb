//! Read access to the sales database.
//!
//! The [`SalesStore`] trait is the seam between HTTP handling and the
//! relational store. [`SqliteStore`] is the production implementation; tests
//! substitute an in-memory one.

use async_trait::async_trait;

use crate::sales::{SalesAggregate, SortParams, TopSeller, Year};

pub(crate) mod queries;

mod error;
pub use error::{Result, StoreError};

mod sqlite;
pub use sqlite::SqliteStore;

/// Read-only access to aggregated sales data.
///
/// Implementations must distinguish "no rows" (an empty / `None` result) from
/// "cannot reach the data" ([`StoreError`]).
#[async_trait]
pub trait SalesStore: Send + Sync + 'static
{
	/// Returns the sales rep with the highest total sales in `year`.
	///
	/// Ties are broken by sales rep name (ascending). Returns `Ok(None)` if
	/// there are no invoices in that year.
	async fn top_seller_for_year(&self, year: Year) -> Result<Option<TopSeller>>;

	/// Returns the total sales of every sales rep for every year they had
	/// invoices in, ordered by `sort`.
	///
	/// Rows that compare equal under `sort` are ordered by sales rep name,
	/// then year, both ascending.
	async fn all_top_sellers(&self, sort: SortParams) -> Result<Vec<SalesAggregate>>;
}
