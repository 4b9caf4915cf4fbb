//! This module contains the [`TopSeller`] and [`SalesAggregate`] types.
//!
//! Field names on the wire match the column aliases of the aggregation
//! queries, so rows can be decoded and serialized without any renaming in
//! between.

use serde::{Deserialize, Serialize};

/// The summed sales of the best sales rep in a single year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct TopSeller
{
	/// The sales rep's full name.
	#[serde(rename = "Sales Rep")]
	#[sqlx(rename = "Sales Rep")]
	#[schema(example = "Jane Peacock")]
	pub sales_rep: String,

	/// Sum of the rep's invoice totals that year, rounded to 2 decimal places.
	#[serde(rename = "Total Sales")]
	#[sqlx(rename = "Total Sales")]
	#[schema(example = 184.84)]
	pub total_sales: f64,
}

/// The summed sales of one sales rep in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct SalesAggregate
{
	/// The sales rep's full name.
	#[serde(rename = "Sales Rep")]
	#[sqlx(rename = "Sales Rep")]
	#[schema(example = "Jane Peacock")]
	pub sales_rep: String,

	/// Sum of all matching invoice totals, rounded to 2 decimal places.
	#[serde(rename = "Total Sales")]
	#[sqlx(rename = "Total Sales")]
	#[schema(example = 184.84)]
	pub total_sales: f64,

	/// The year these sales were made in.
	///
	/// `null` if the invoice dates could not be read as dates.
	#[serde(rename = "Year")]
	#[sqlx(rename = "Year")]
	#[schema(example = "2009")]
	pub year: Option<String>,
}
