//! The contract every list screen's record type fulfils.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Labelled;
use crate::ParseError;

/// Closed set of fields a record exposes to the pipeline.
pub trait RecordField: Labelled {
	/// Parse a field by its literal (`amount`) or label (`Amount`).
	fn parse(value: &str) -> Result<Self, ParseError> {
		Self::lookup(value).ok_or_else(|| ParseError::UnknownField {
			field: value.to_string(),
			expected: Self::literals().join(", "),
		})
	}
}

/// Primitive value read from a record through its field accessor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
	Text(&'a str),
	Number(f64),
	Flag(bool),
	/// Optional field with no value on this record.
	Missing,
}

impl FieldValue<'_> {
	/// Numeric view of the value, used for aggregation.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	pub(crate) fn sort_key(&self) -> SortKey {
		match self {
			Self::Missing => SortKey::Missing,
			Self::Flag(flag) => SortKey::Flag(*flag),
			Self::Number(value) => SortKey::Number(*value),
			Self::Text(text) => SortKey::Text(text.to_lowercase()),
		}
	}
}

/// Owned, totally ordered comparison key extracted once per record before a
/// sort. Text is case-folded; missing values order first.
#[derive(Debug, Clone)]
pub(crate) enum SortKey {
	Missing,
	Flag(bool),
	Number(f64),
	Text(String),
}

impl SortKey {
	fn rank(&self) -> u8 {
		match self {
			Self::Missing => 0,
			Self::Flag(_) => 1,
			Self::Number(_) => 2,
			Self::Text(_) => 3,
		}
	}
}

impl Ord for SortKey {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Flag(a), Self::Flag(b)) => a.cmp(b),
			(Self::Number(a), Self::Number(b)) => a.total_cmp(b),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

impl PartialOrd for SortKey {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for SortKey {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for SortKey {}

/// Categorical and range criteria for one record type. `Default` must accept
/// every record.
pub trait RecordFilter<R>: Default + Clone + fmt::Debug {
	fn matches(&self, record: &R) -> bool;
}

/// One row of a screen's flat collection.
pub trait Record: Clone + fmt::Debug + Serialize {
	type Field: RecordField;
	type Filter: RecordFilter<Self>;

	/// Text fields the search term is matched against (any may match).
	const SEARCH_FIELDS: &'static [Self::Field];
	/// Numeric fields summed over the filtered set for summary cards.
	const SUMMED_FIELDS: &'static [Self::Field];

	/// Identifier, unique within its collection.
	fn id(&self) -> &str;

	/// Read one field.
	fn field(&self, field: Self::Field) -> FieldValue<'_>;

	/// Whether `needle` (already trimmed and case-folded) occurs in any
	/// searchable field. An empty needle matches everything.
	fn matches_search(&self, needle: &str) -> bool {
		if needle.is_empty() {
			return true;
		}
		Self::SEARCH_FIELDS.iter().any(|&field| match self.field(field) {
			FieldValue::Text(text) => text.to_lowercase().contains(needle),
			_ => false,
		})
	}
}

/// Categorical filter value: the wildcard or exactly one accepted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice<V> {
	All,
	Only(V),
}

impl<V> Default for Choice<V> {
	fn default() -> Self {
		Self::All
	}
}

impl<V: PartialEq> Choice<V> {
	/// Whether `value` passes this filter.
	pub fn accepts(&self, value: &V) -> bool {
		match self {
			Self::All => true,
			Self::Only(wanted) => wanted == value,
		}
	}
}

impl<V: Labelled> Choice<V> {
	/// Step through `All`, then every variant in order, then back to `All`.
	#[must_use]
	pub fn cycle(self) -> Self {
		let variants = V::variants();
		match self {
			Self::All => variants.first().copied().map_or(Self::All, Self::Only),
			Self::Only(current) => variants
				.iter()
				.position(|variant| *variant == current)
				.and_then(|index| variants.get(index + 1))
				.copied()
				.map_or(Self::All, Self::Only),
		}
	}

	/// Literal of the selected value, or `all`.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Only(value) => value.as_str(),
		}
	}

	/// Label of the selected value, or `All`.
	pub fn label(&self) -> &'static str {
		match self {
			Self::All => "All",
			Self::Only(value) => value.label(),
		}
	}
}

impl<V> FromStr for Choice<V>
where
	V: FromStr<Err = ParseError>,
{
	type Err = ParseError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if value.trim().eq_ignore_ascii_case("all") {
			return Ok(Self::All);
		}
		value.parse().map(Self::Only)
	}
}

/// Inclusive numeric interval applied to a price field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
	pub min: f64,
	pub max: f64,
}

impl PriceRange {
	#[must_use]
	pub fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Whether `price` lies within `[min, max]`.
	pub fn contains(&self, price: f64) -> bool {
		price >= self.min && price <= self.max
	}

	/// Smallest range covering every price, or `None` for no prices.
	pub fn spanning(prices: impl IntoIterator<Item = f64>) -> Option<Self> {
		prices.into_iter().fold(None, |range, price| match range {
			None => Some(Self::new(price, price)),
			Some(Self { min, max }) => Some(Self::new(min.min(price), max.max(price))),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn text_keys_compare_case_insensitively() {
		let upper = FieldValue::Text("Banana").sort_key();
		let lower = FieldValue::Text("apple").sort_key();
		assert_eq!(lower.cmp(&upper), Ordering::Less);
		assert_eq!(
			FieldValue::Text("ABC").sort_key(),
			FieldValue::Text("abc").sort_key()
		);
	}

	#[test]
	fn numbers_compare_numerically_and_missing_sorts_first() {
		let small = FieldValue::Number(9.0).sort_key();
		let large = FieldValue::Number(10.0).sort_key();
		assert!(small < large);
		assert!(FieldValue::Missing.sort_key() < small);
	}

	#[test]
	fn choice_all_parses_from_wildcard_literal() {
		let choice: Choice<crate::OrderStatus> = "ALL".parse().expect("parse");
		assert_eq!(choice, Choice::All);
		let choice: Choice<crate::OrderStatus> = "completed".parse().expect("parse");
		assert_eq!(choice, Choice::Only(crate::OrderStatus::Completed));
	}

	#[test]
	fn choice_cycle_wraps_back_to_all() {
		use crate::Role;

		let mut choice = Choice::<Role>::All;
		let mut seen = Vec::new();
		for _ in 0..3 {
			choice = choice.cycle();
			seen.push(choice);
		}
		assert_eq!(
			seen,
			vec![Choice::Only(Role::User), Choice::Only(Role::Admin), Choice::All]
		);
	}

	#[test]
	fn price_range_is_inclusive_and_spans_data() {
		let range = PriceRange::spanning([149.0, 899.0, 119.0]).expect("range");
		assert_eq!(range, PriceRange::new(119.0, 899.0));
		assert!(range.contains(119.0));
		assert!(range.contains(899.0));
		assert!(!range.contains(899.01));
		assert_eq!(PriceRange::spanning(std::iter::empty()), None);
	}
}
