//! This module contains helpers for unit/integration tests.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use serde::de::DeserializeOwned;

use crate::sales::{SalesAggregate, SortBy, SortOrder, SortParams, TopSeller, Year};
use crate::store::{self, SalesStore, StoreError};

/// Global constructor that will run before tests.
#[ctor::ctor]
fn ctor()
{
	use tracing_subscriber::fmt::format::FmtSpan;
	use tracing_subscriber::EnvFilter;

	color_eyre::install().expect("failed to install color-eyre");
	tracing_subscriber::fmt()
		.compact()
		.with_ansi(true)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_target(true)
		.with_test_writer()
		.with_thread_ids(true)
		.with_thread_names(true)
		.with_env_filter(EnvFilter::from_default_env())
		.init();
}

macro_rules! assert {
	($expr:expr $(, $($msg:tt)*)?) => {
		::color_eyre::eyre::ensure!($expr $(, $($msg)*)?)
	};
}

macro_rules! assert_eq {
	($lhs:expr, $rhs:expr $(,)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if lhs != rhs {
					::color_eyre::eyre::bail!(
						"assertion `{} == {}` failed\n  lhs: {lhs:?}\n  rhs: {rhs:?}",
						stringify!($lhs),
						stringify!($rhs),
					);
				}
			}
		}
	};
}

macro_rules! assert_matches {
	($expr:expr, $pat:pat $(if $cond:expr)? $(, $($msg:tt)*)?) => {
		::color_eyre::eyre::ensure!(matches!($expr, $pat $(if $cond)?) $(, $($msg)*)?)
	};
}

pub(crate) use {assert, assert_eq, assert_matches};

/// Reads an HTTP body to completion and deserializes it as JSON.
pub async fn parse_body<T>(body: Body) -> color_eyre::Result<T>
where
	T: DeserializeOwned,
{
	let bytes = axum::body::to_bytes(body, usize::MAX).await?;
	let value = serde_json::from_slice(&bytes)?;

	Ok(value)
}

/// Builds the full application router on top of `store`.
pub fn router<S>(store: S) -> Router
where
	S: SalesStore,
{
	crate::router(Arc::new(store))
}

/// A single invoice known to a [`MemoryStore`].
#[derive(Debug, Clone)]
struct Invoice
{
	/// Identifies the employee responsible for the customer.
	employee_id: u32,

	/// Full name of that employee.
	sales_rep: String,

	/// The year the invoice was issued in.
	year: u16,

	/// The invoice total.
	total: f64,
}

/// A [`SalesStore`] that computes aggregates in memory.
///
/// It orders results exactly like [`SqliteStore`], so handler tests do not
/// need a database.
///
/// [`SqliteStore`]: crate::store::SqliteStore
#[derive(Debug, Clone, Default)]
pub struct MemoryStore
{
	/// Every invoice, in insertion order.
	invoices: Vec<Invoice>,
}

impl MemoryStore
{
	/// Creates an empty store.
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Adds an invoice handled by `sales_rep`.
	///
	/// Sales reps with the same name but different `employee_id`s are
	/// aggregated separately.
	pub fn with_invoice(mut self, employee_id: u32, sales_rep: &str, year: u16, total: f64) -> Self
	{
		self.invoices.push(Invoice { employee_id, sales_rep: sales_rep.to_owned(), year, total });
		self
	}

	/// A store containing the same invoices as `database/fixtures/sales.sql`.
	pub fn with_sales() -> Self
	{
		Self::new()
			.with_invoice(1, "Jane Peacock", 2009, 100.50)
			.with_invoice(1, "Jane Peacock", 2009, 84.34)
			.with_invoice(2, "Steve Johnson", 2010, 121.91)
			.with_invoice(2, "Steve Johnson", 2010, 100.00)
			.with_invoice(1, "Jane Peacock", 2010, 13.86)
			.with_invoice(2, "Steve Johnson", 2009, 1.98)
	}

	/// Sums up invoices per employee and year.
	fn aggregate(&self) -> Vec<(u32, SalesAggregate)>
	{
		let mut totals = BTreeMap::<(u32, u16), (&str, f64)>::new();

		for invoice in &self.invoices {
			let entry = totals
				.entry((invoice.employee_id, invoice.year))
				.or_insert((invoice.sales_rep.as_str(), 0.0));

			entry.1 += invoice.total;
		}

		totals
			.into_iter()
			.map(|((employee_id, year), (sales_rep, total))| {
				let aggregate = SalesAggregate {
					sales_rep: sales_rep.to_owned(),
					total_sales: (total * 100.0).round() / 100.0,
					year: Some(year.to_string()),
				};

				(employee_id, aggregate)
			})
			.collect()
	}
}

/// Orders rows the same way the SQL queries do.
fn compare(sort: SortParams, lhs: &(u32, SalesAggregate), rhs: &(u32, SalesAggregate)) -> Ordering
{
	let (lhs_id, lhs) = lhs;
	let (rhs_id, rhs) = rhs;

	let ordering = match sort.by {
		SortBy::SalesRep => lhs.sales_rep.cmp(&rhs.sales_rep),
		SortBy::TotalSales => lhs.total_sales.total_cmp(&rhs.total_sales),
		SortBy::Year => lhs.year.cmp(&rhs.year),
	};

	let ordering = match sort.order {
		SortOrder::Ascending => ordering,
		SortOrder::Descending => ordering.reverse(),
	};

	ordering
		.then_with(|| lhs.sales_rep.cmp(&rhs.sales_rep))
		.then_with(|| lhs.year.cmp(&rhs.year))
		.then_with(|| lhs_id.cmp(rhs_id))
}

#[async_trait]
impl SalesStore for MemoryStore
{
	async fn top_seller_for_year(&self, year: Year) -> store::Result<Option<TopSeller>>
	{
		let year = year.to_string();
		let sort = SortParams { by: SortBy::TotalSales, order: SortOrder::Descending };

		let top_seller = self
			.aggregate()
			.into_iter()
			.filter(|(_, row)| row.year.as_deref() == Some(year.as_str()))
			.min_by(|lhs, rhs| compare(sort, lhs, rhs))
			.map(|(_, row)| TopSeller { sales_rep: row.sales_rep, total_sales: row.total_sales });

		Ok(top_seller)
	}

	async fn all_top_sellers(&self, sort: SortParams) -> store::Result<Vec<SalesAggregate>>
	{
		let mut rows = self.aggregate();

		rows.sort_by(|lhs, rhs| compare(sort, lhs, rhs));

		Ok(rows.into_iter().map(|(_, row)| row).collect())
	}
}

/// A [`SalesStore`] whose database file has gone missing.
#[derive(Debug, Clone, Copy)]
pub struct MissingStore;

impl MissingStore
{
	/// The error every query fails with.
	fn error() -> StoreError
	{
		StoreError::Missing { path: PathBuf::from("/var/lib/sales-api/data.db") }
	}
}

#[async_trait]
impl SalesStore for MissingStore
{
	async fn top_seller_for_year(&self, _: Year) -> store::Result<Option<TopSeller>>
	{
		Err(Self::error())
	}

	async fn all_top_sellers(&self, _: SortParams) -> store::Result<Vec<SalesAggregate>>
	{
		Err(Self::error())
	}
}

/// A [`SalesStore`] that panics on every query.
#[derive(Debug, Clone, Copy)]
pub struct PanickingStore;

#[async_trait]
impl SalesStore for PanickingStore
{
	async fn top_seller_for_year(&self, year: Year) -> store::Result<Option<TopSeller>>
	{
		panic!("cannot look up {year}");
	}

	async fn all_top_sellers(&self, _: SortParams) -> store::Result<Vec<SalesAggregate>>
	{
		panic!("cannot list sellers");
	}
}
