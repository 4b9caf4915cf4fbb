//! Shared query strings.
//!
//! Column aliases double as the JSON field names of [`TopSeller`] and
//! [`SalesAggregate`].
//!
//! [`TopSeller`]: crate::sales::TopSeller
//! [`SalesAggregate`]: crate::sales::SalesAggregate

use crate::sales::{SortBy, SortOrder, SortParams};

/// Total sales per sales rep in a single year, best first.
///
/// Takes the year as a 4-digit string.
pub const TOP_SELLER_FOR_YEAR: &str = r#"
	SELECT
	  e.FirstName || ' ' || e.LastName AS "Sales Rep",
	  ROUND(SUM(i.Total), 2) AS "Total Sales"
	FROM
	  Invoice AS i
	  JOIN Customer AS c ON c.CustomerId = i.CustomerId
	  JOIN Employee AS e ON e.EmployeeId = c.SupportRepId
	WHERE
	  STRFTIME('%Y', i.InvoiceDate) = ?
	GROUP BY
	  e.EmployeeId
	ORDER BY
	  "Total Sales" DESC,
	  "Sales Rep" ASC,
	  e.EmployeeId ASC
	LIMIT
	  1
"#;

/// Total sales per sales rep and year.
///
/// Has no `ORDER BY` clause; see [`order_clause()`].
pub const ALL_TOP_SELLERS: &str = r#"
	SELECT
	  e.FirstName || ' ' || e.LastName AS "Sales Rep",
	  ROUND(SUM(i.Total), 2) AS "Total Sales",
	  STRFTIME('%Y', i.InvoiceDate) AS "Year"
	FROM
	  Invoice AS i
	  JOIN Customer AS c ON c.CustomerId = i.CustomerId
	  JOIN Employee AS e ON e.EmployeeId = c.SupportRepId
	GROUP BY
	  e.EmployeeId,
	  STRFTIME('%Y', i.InvoiceDate)
"#;

/// Returns the `ORDER BY` clause for [`ALL_TOP_SELLERS`].
///
/// Only ever returns one of a fixed set of strings, so the result is safe to
/// splice into a query.
pub const fn order_clause(sort: SortParams) -> &'static str
{
	match (sort.by, sort.order) {
		(SortBy::SalesRep, SortOrder::Ascending) => {
			r#" ORDER BY "Sales Rep" ASC, "Year" ASC, e.EmployeeId ASC"#
		}
		(SortBy::SalesRep, SortOrder::Descending) => {
			r#" ORDER BY "Sales Rep" DESC, "Year" ASC, e.EmployeeId ASC"#
		}
		(SortBy::TotalSales, SortOrder::Ascending) => {
			r#" ORDER BY "Total Sales" ASC, "Sales Rep" ASC, "Year" ASC, e.EmployeeId ASC"#
		}
		(SortBy::TotalSales, SortOrder::Descending) => {
			r#" ORDER BY "Total Sales" DESC, "Sales Rep" ASC, "Year" ASC, e.EmployeeId ASC"#
		}
		(SortBy::Year, SortOrder::Ascending) => {
			r#" ORDER BY "Year" ASC, "Sales Rep" ASC, e.EmployeeId ASC"#
		}
		(SortBy::Year, SortOrder::Descending) => {
			r#" ORDER BY "Year" DESC, "Sales Rep" ASC, e.EmployeeId ASC"#
		}
	}
}
