//! This module contains the [`Year`] type.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A calendar year that sales can be aggregated for.
///
/// Only years in the range `1900..=2100` are accepted. Anything outside of
/// that range is considered nonsense input rather than a year we simply have
/// no data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year
{
	/// The earliest accepted year.
	pub const MIN: u16 = 1900;

	/// The latest accepted year.
	pub const MAX: u16 = 2100;

	/// Creates a new [`Year`], if `year` is within the accepted range.
	pub const fn new(year: u16) -> Option<Self>
	{
		if year < Self::MIN || year > Self::MAX {
			return None;
		}

		Some(Self(year))
	}

	/// Returns the year as an integer.
	pub const fn get(self) -> u16
	{
		self.0
	}
}

impl fmt::Display for Year
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, f)
	}
}

/// Error returned when parsing a [`Year`] fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
	"invalid year `{input}`; expected a 4-digit year between {min} and {max}",
	min = Year::MIN,
	max = Year::MAX
)]
pub struct InvalidYear
{
	/// The rejected input.
	pub input: String,
}

impl FromStr for Year
{
	type Err = InvalidYear;

	fn from_str(input: &str) -> Result<Self, Self::Err>
	{
		let invalid = || InvalidYear { input: input.to_owned() };

		input
			.parse::<i64>()
			.ok()
			.and_then(|year| u16::try_from(year).ok())
			.and_then(Self::new)
			.ok_or_else(invalid)
	}
}
