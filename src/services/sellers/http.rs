//! HTTP handlers for this service.

use axum::extract::State;
use axum::{routing, Router};

use super::{
	Error,
	FetchTopSellerRequest,
	FetchTopSellerResponse,
	FetchTopSellersQuery,
	FetchTopSellersRequest,
	FetchTopSellersResponse,
	SellerService,
};
use crate::http::extract::{Path, Query};
use crate::http::{fallback, ErrorResponse};
use crate::sales::{SortParams, Year};

impl From<SellerService> for Router
{
	fn from(svc: SellerService) -> Self
	{
		let top = routing::get(get_top).fallback(fallback::method_not_allowed);
		let top_for_year = routing::get(get_top_for_year).fallback(fallback::method_not_allowed);

		Router::new()
			.route("/top", top)
			.route("/:year/top", top_for_year)
			.with_state(svc)
	}
}

/// Returns the sales rep with the highest total sales in a year.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  get,
  path = "/sellers/{year}/top",
  tag = "Sellers",
  params(("year" = u16, Path, description = "a 4-digit year between 1900 and 2100")),
  responses(
    (status = OK, description = "The year's best sales rep.", body = crate::sales::TopSeller),
    (status = BAD_REQUEST, description = "The year is malformed or out of range.", body = ErrorResponse),
    (status = NOT_FOUND, description = "There were no sales that year.", body = ErrorResponse),
    (status = INTERNAL_SERVER_ERROR, description = "The database is unavailable.", body = ErrorResponse),
  ),
)]
pub(crate) async fn get_top_for_year(
	State(svc): State<SellerService>,
	Path(year): Path<String>,
) -> Result<FetchTopSellerResponse, ErrorResponse>
{
	let year = year.parse::<Year>().map_err(Error::from)?;
	let res = svc
		.fetch_top_seller(FetchTopSellerRequest { year })
		.await?
		.ok_or(Error::NoSalesForYear { year })?;

	Ok(res)
}

/// Returns every sales rep's total sales per year.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  get,
  path = "/sellers/top",
  tag = "Sellers",
  params(FetchTopSellersQuery),
  responses(
    (status = OK, description = "Yearly totals, possibly empty.", body = [crate::sales::SalesAggregate]),
    (status = BAD_REQUEST, description = "A sort parameter is invalid.", body = ErrorResponse),
    (status = INTERNAL_SERVER_ERROR, description = "The database is unavailable.", body = ErrorResponse),
  ),
)]
pub(crate) async fn get_top(
	State(svc): State<SellerService>,
	Query(query): Query<FetchTopSellersQuery>,
) -> Result<FetchTopSellersResponse, ErrorResponse>
{
	let sort = SortParams::new(query.order_by.as_deref(), query.order.as_deref())
		.map_err(Error::from)?;

	let res = svc.fetch_top_sellers(FetchTopSellersRequest { sort }).await?;

	Ok(res)
}

#[cfg(test)]
mod tests
{
	use std::sync::Arc;

	use axum::body::Body;
	use axum::extract::Request;
	use axum::http::{Method, StatusCode};
	use serde_json::{json, Value};
	use tower::ServiceExt;

	use super::*;
	use crate::store::SalesStore;
	use crate::testing::{self, MemoryStore, MissingStore};

	fn router<S>(store: S) -> Router
	where
		S: SalesStore,
	{
		Router::from(SellerService::new(Arc::new(store)))
	}

	async fn get(router: &Router, uri: &str) -> color_eyre::Result<(StatusCode, Value)>
	{
		let req = Request::builder()
			.method(Method::GET)
			.uri(uri)
			.body(Body::empty())?;

		let res = router.clone().oneshot(req).await?;
		let status = res.status();
		let body = testing::parse_body::<Value>(res.into_body()).await?;

		Ok((status, body))
	}

	#[tokio::test]
	async fn get_top_for_year_works() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());
		let (status, body) = get(&router, "/2009/top").await?;

		testing::assert_eq!(status, StatusCode::OK);
		testing::assert_eq!(body, json!({ "Sales Rep": "Jane Peacock", "Total Sales": 184.84 }));

		Ok(())
	}

	#[tokio::test]
	async fn get_top_for_year_no_data() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());
		let (status, body) = get(&router, "/2011/top").await?;

		testing::assert_eq!(status, StatusCode::NOT_FOUND);
		testing::assert_eq!(
			body,
			json!({
				"error": "No data found",
				"message": "no sales data found for year 2011",
			})
		);

		Ok(())
	}

	#[tokio::test]
	async fn get_top_for_year_invalid_year() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());

		for year in ["1899", "2101", "0", "-2009", "20a9", "abcd", "99999999999999999999", "%202009"] {
			let (status, body) = get(&router, &format!("/{year}/top")).await?;

			testing::assert_eq!(status, StatusCode::BAD_REQUEST);
			testing::assert_eq!(body["error"], "Invalid year");
			testing::assert!(
				body["message"].as_str().is_some_and(|msg| msg.contains("between 1900 and 2100")),
				"unexpected message for `{year}`: {body}"
			);
		}

		Ok(())
	}

	#[tokio::test]
	async fn get_top_for_year_boundaries() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::new().with_invoice(1, "Jane Peacock", 1900, 1.0));
		let (status, _) = get(&router, "/1900/top").await?;

		testing::assert_eq!(status, StatusCode::OK);

		let (status, _) = get(&router, "/2100/top").await?;

		testing::assert_eq!(status, StatusCode::NOT_FOUND);

		Ok(())
	}

	#[tokio::test]
	async fn get_top_works() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());
		let (status, body) = get(&router, "/top").await?;

		testing::assert_eq!(status, StatusCode::OK);
		testing::assert_eq!(
			body,
			json!([
				{ "Sales Rep": "Steve Johnson", "Total Sales": 221.91, "Year": "2010" },
				{ "Sales Rep": "Jane Peacock", "Total Sales": 184.84, "Year": "2009" },
				{ "Sales Rep": "Jane Peacock", "Total Sales": 13.86, "Year": "2010" },
				{ "Sales Rep": "Steve Johnson", "Total Sales": 1.98, "Year": "2009" },
			])
		);

		Ok(())
	}

	#[tokio::test]
	async fn get_top_sorts_by_every_column() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());
		let cases = [
			("sales_rep", "asc", "Sales Rep"),
			("sales_rep", "desc", "Sales Rep"),
			("total_sales", "asc", "Total Sales"),
			("total_sales", "DESC", "Total Sales"),
			("year", "Asc", "Year"),
			("year", "desc", "Year"),
		];

		for (order_by, order, column) in cases {
			let (status, body) = get(&router, &format!("/top?order_by={order_by}&order={order}")).await?;

			testing::assert_eq!(status, StatusCode::OK);

			let rows = body.as_array().cloned().unwrap_or_default();
			let values = rows.iter().map(|row| row[column].clone()).collect::<Vec<_>>();
			let ascending = order.eq_ignore_ascii_case("asc");

			testing::assert_eq!(rows.len(), 4);
			testing::assert!(
				values.windows(2).all(|pair| {
					let ordering = match pair {
						[lhs, rhs] => match (lhs, rhs) {
							(Value::Number(lhs), Value::Number(rhs)) => {
								lhs.as_f64().partial_cmp(&rhs.as_f64())
							}
							(Value::String(lhs), Value::String(rhs)) => Some(lhs.cmp(rhs)),
							_ => None,
						},
						_ => None,
					};

					match ordering {
						Some(std::cmp::Ordering::Equal) => true,
						Some(std::cmp::Ordering::Less) => ascending,
						Some(std::cmp::Ordering::Greater) => !ascending,
						None => false,
					}
				}),
				"`{order_by} {order}` is not sorted: {values:?}"
			);
		}

		Ok(())
	}

	#[tokio::test]
	async fn get_top_invalid_sort_params() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());

		let (status, body) = get(&router, "/top?order_by=bogus").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);
		testing::assert_eq!(body["error"], "Invalid order_by parameter");
		testing::assert!(
			body["message"]
				.as_str()
				.is_some_and(|msg| msg.contains("sales_rep, total_sales, year")),
			"{body}"
		);

		let (status, body) = get(&router, "/top?order=sideways").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);
		testing::assert_eq!(body["error"], "Invalid order parameter");
		testing::assert!(
			body["message"].as_str().is_some_and(|msg| msg.contains("asc, desc")),
			"{body}"
		);

		let (status, body) = get(&router, "/top?order_by=Year&order=sideways").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);
		testing::assert_eq!(body["error"], "Invalid order_by parameter");

		let (status, _) = get(&router, "/top?order_by=").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);

		Ok(())
	}

	#[tokio::test]
	async fn get_top_duplicate_params() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());
		let (status, body) = get(&router, "/top?order=asc&order=desc").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);
		testing::assert_eq!(body["error"], "Invalid query string");

		Ok(())
	}

	#[tokio::test]
	async fn get_top_empty_store() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::new());
		let (status, body) = get(&router, "/top").await?;

		testing::assert_eq!(status, StatusCode::OK);
		testing::assert_eq!(body, json!([]));

		Ok(())
	}

	#[tokio::test]
	async fn responses_are_idempotent() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());

		for uri in ["/top?order_by=year", "/2010/top"] {
			let mut bodies = Vec::new();

			for _ in 0..3 {
				let req = Request::get(uri).body(Body::empty())?;
				let res = router.clone().oneshot(req).await?;
				let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;

				bodies.push(bytes);
			}

			testing::assert!(bodies.iter().all(|body| *body == bodies[0]), "{uri}");
		}

		Ok(())
	}

	#[tokio::test]
	async fn missing_database() -> color_eyre::Result<()>
	{
		let router = router(MissingStore);

		for uri in ["/2009/top", "/top"] {
			let (status, body) = get(&router, uri).await?;

			testing::assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
			testing::assert_eq!(
				body,
				json!({
					"error": "Database not found",
					"message": "Please ensure the database file exists",
				})
			);
		}

		Ok(())
	}

	#[tokio::test]
	async fn validation_happens_before_queries() -> color_eyre::Result<()>
	{
		let router = router(MissingStore);

		let (status, _) = get(&router, "/1800/top").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);

		let (status, _) = get(&router, "/top?order_by=nope").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);

		Ok(())
	}

	#[tokio::test]
	async fn only_get_is_allowed() -> color_eyre::Result<()>
	{
		let router = router(MemoryStore::with_sales());

		for (method, uri) in [(Method::POST, "/top"), (Method::DELETE, "/2009/top")] {
			let req = Request::builder().method(method).uri(uri).body(Body::empty())?;
			let res = router.clone().oneshot(req).await?;

			testing::assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

			let body = testing::parse_body::<Value>(res.into_body()).await?;

			testing::assert_eq!(body["error"], "Method not allowed");
		}

		Ok(())
	}
}
