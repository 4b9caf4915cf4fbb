//! A service for looking up the best performing sales reps.

use std::fmt;
use std::sync::Arc;

use crate::store::SalesStore;

pub(crate) mod http;

mod error;
pub use error::{Error, Result};

pub(crate) mod models;
pub use models::{
	FetchTopSellerRequest,
	FetchTopSellerResponse,
	FetchTopSellersQuery,
	FetchTopSellersRequest,
	FetchTopSellersResponse,
};

/// A service for looking up the best performing sales reps.
#[derive(Clone)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct SellerService
{
	store: Arc<dyn SalesStore>,
}

impl fmt::Debug for SellerService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("SellerService").finish_non_exhaustive()
	}
}

impl SellerService
{
	/// Create a new [`SellerService`].
	#[tracing::instrument(skip(store))]
	pub fn new(store: Arc<dyn SalesStore>) -> Self
	{
		Self { store }
	}

	/// Fetches the sales rep with the highest total sales in a given year.
	///
	/// This will return `Ok(None)` if there were no sales that year, but
	/// everything else went fine.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_top_seller(
		&self,
		req: FetchTopSellerRequest,
	) -> Result<Option<FetchTopSellerResponse>>
	{
		let top_seller = self.store.top_seller_for_year(req.year).await?;

		Ok(top_seller.map(FetchTopSellerResponse))
	}

	/// Fetches the yearly sales totals of every sales rep.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_top_sellers(
		&self,
		req: FetchTopSellersRequest,
	) -> Result<FetchTopSellersResponse>
	{
		let top_sellers = self.store.all_top_sellers(req.sort).await?;

		tracing::debug!(rows = top_sellers.len(), "fetched top sellers");

		Ok(FetchTopSellersResponse(top_sellers))
	}
}
