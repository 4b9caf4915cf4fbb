//! Request / Response types for this service.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::sales::{SalesAggregate, SortParams, TopSeller, Year};

/// Request payload for fetching the best sales rep of a year.
#[derive(Debug, Clone, Copy)]
pub struct FetchTopSellerRequest
{
	/// The year to look at.
	pub year: Year,
}

/// Response payload for fetching the best sales rep of a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FetchTopSellerResponse(pub TopSeller);

impl IntoResponse for FetchTopSellerResponse
{
	fn into_response(self) -> Response
	{
		Json(self).into_response()
	}
}

/// Request payload for fetching every sales rep's yearly totals.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTopSellersRequest
{
	/// How to order the results.
	pub sort: SortParams,
}

/// Response payload for fetching every sales rep's yearly totals.
///
/// This is a plain JSON array, which is empty if there are no sales at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FetchTopSellersResponse(pub Vec<SalesAggregate>);

impl IntoResponse for FetchTopSellersResponse
{
	fn into_response(self) -> Response
	{
		Json(self).into_response()
	}
}

/// Query parameters for `GET /sellers/top`.
///
/// These are kept as raw strings so invalid values can be reported with the
/// list of accepted ones.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchTopSellersQuery
{
	/// The column to sort by: `sales_rep`, `total_sales` or `year`.
	#[param(example = "total_sales")]
	pub order_by: Option<String>,

	/// The sort direction: `asc` or `desc`, case-insensitive.
	#[param(example = "desc")]
	pub order: Option<String>,
}
