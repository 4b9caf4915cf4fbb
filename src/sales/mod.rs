//! Core sales types.
//!
//! These are the validated inputs and the derived output rows of the sales
//! aggregation queries. Raw request parameters are turned into these types
//! before any query is executed, so the store only ever sees well-formed
//! input.

mod year;
pub use year::{InvalidYear, Year};

mod sorting;
pub use sorting::{InvalidSortParams, SortBy, SortOrder, SortParams};

mod aggregate;
pub use aggregate::{SalesAggregate, TopSeller};
