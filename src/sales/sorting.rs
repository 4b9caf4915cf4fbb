//! Sorting parameters for listing sales aggregates.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// The column to sort sales aggregates by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy
{
	/// Sort by the sales rep's full name.
	SalesRep,

	/// Sort by the aggregated sales total.
	#[default]
	TotalSales,

	/// Sort by the year the sales were made in.
	Year,
}

impl SortBy
{
	/// All accepted values, in the order they are listed in error messages.
	pub const ALL: [Self; 3] = [Self::SalesRep, Self::TotalSales, Self::Year];

	/// Returns the query parameter value for this column.
	pub const fn as_str(self) -> &'static str
	{
		match self {
			Self::SalesRep => "sales_rep",
			Self::TotalSales => "total_sales",
			Self::Year => "year",
		}
	}

	/// Returns a comma separated list of all accepted values.
	pub fn allowed_values() -> String
	{
		Self::ALL.iter().map(|sort_by| sort_by.as_str()).join(", ")
	}
}

impl fmt::Display for SortBy
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}

impl FromStr for SortBy
{
	type Err = InvalidSortParams;

	fn from_str(input: &str) -> Result<Self, Self::Err>
	{
		Self::ALL
			.into_iter()
			.find(|sort_by| sort_by.as_str() == input)
			.ok_or_else(|| InvalidSortParams::OrderBy { input: input.to_owned() })
	}
}

/// The direction to sort sales aggregates in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder
{
	/// Smallest values first.
	Ascending,

	/// Largest values first.
	#[default]
	Descending,
}

impl SortOrder
{
	/// All accepted values, in the order they are listed in error messages.
	pub const ALL: [Self; 2] = [Self::Ascending, Self::Descending];

	/// Returns the query parameter value for this direction.
	pub const fn as_str(self) -> &'static str
	{
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Returns a comma separated list of all accepted values.
	pub fn allowed_values() -> String
	{
		Self::ALL.iter().map(|order| order.as_str()).join(", ")
	}
}

impl fmt::Display for SortOrder
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}

/// Directions are matched case-insensitively, so `DESC` and `Asc` are fine.
impl FromStr for SortOrder
{
	type Err = InvalidSortParams;

	fn from_str(input: &str) -> Result<Self, Self::Err>
	{
		Self::ALL
			.into_iter()
			.find(|order| order.as_str().eq_ignore_ascii_case(input))
			.ok_or_else(|| InvalidSortParams::Order { input: input.to_owned() })
	}
}

/// Validated sorting parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortParams
{
	/// The column to sort by.
	pub by: SortBy,

	/// The direction to sort in.
	pub order: SortOrder,
}

impl SortParams
{
	/// Validates raw `order_by` / `order` parameters.
	///
	/// Missing parameters fall back to their defaults (`total_sales` and
	/// `desc`). `order_by` is checked before `order`.
	pub fn new(order_by: Option<&str>, order: Option<&str>) -> Result<Self, InvalidSortParams>
	{
		let by = order_by.map(str::parse::<SortBy>).transpose()?.unwrap_or_default();
		let order = order.map(str::parse::<SortOrder>).transpose()?.unwrap_or_default();

		Ok(Self { by, order })
	}
}

/// Error returned when validating [`SortParams`] fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSortParams
{
	/// The requested sort column is unknown.
	#[error("invalid order_by `{input}`; order_by must be one of: {allowed}", allowed = SortBy::allowed_values())]
	OrderBy
	{
		/// The rejected input.
		input: String,
	},

	/// The requested sort direction is unknown.
	#[error("invalid order `{input}`; order must be one of: {allowed}", allowed = SortOrder::allowed_values())]
	Order
	{
		/// The rejected input.
		input: String,
	},
}
