//! The UI-selected criteria a screen feeds into the pipeline.

use std::fmt;
use std::str::FromStr;

use super::{Record, RecordField};
use crate::ParseError;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
	Ascending,
	Descending,
	#[default]
	Unsorted,
}

impl SortDirection {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
			Self::Unsorted => "none",
		}
	}
}

impl FromStr for SortDirection {
	type Err = ParseError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Ascending),
			"desc" | "descending" => Ok(Self::Descending),
			"none" => Ok(Self::Unsorted),
			_ => Err(ParseError::UnknownDirection(value.to_string())),
		}
	}
}

/// A column and the direction to sort it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec<F> {
	pub field: F,
	pub direction: SortDirection,
}

impl<F: RecordField> SortSpec<F> {
	#[must_use]
	pub fn ascending(field: F) -> Self {
		Self {
			field,
			direction: SortDirection::Ascending,
		}
	}

	#[must_use]
	pub fn descending(field: F) -> Self {
		Self {
			field,
			direction: SortDirection::Descending,
		}
	}

	/// Whether this spec actually reorders records.
	pub fn is_active(&self) -> bool {
		self.direction != SortDirection::Unsorted
	}
}

impl<F: RecordField> fmt::Display for SortSpec<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.field.as_str(), self.direction.as_str())
	}
}

/// Parses `field` or `field:asc|desc`; a bare field sorts ascending.
impl<F: RecordField> FromStr for SortSpec<F> {
	type Err = ParseError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let (field, direction) = match value.split_once(':') {
			Some((field, direction)) => (field, direction.parse()?),
			None => (value, SortDirection::Ascending),
		};
		Ok(Self {
			field: F::parse(field)?,
			direction,
		})
	}
}

/// How clicking a column header changes the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
	/// `none -> ascending -> descending -> none` on the same column.
	#[default]
	Cycle,
	/// `ascending <-> descending`; the sort is never cleared.
	Toggle,
}

impl SortPolicy {
	/// Sort to apply after the user activates `field`. A different column
	/// always starts ascending.
	pub fn next<F: RecordField>(self, current: Option<SortSpec<F>>, field: F) -> Option<SortSpec<F>> {
		let Some(current) = current.filter(|spec| spec.field == field && spec.is_active()) else {
			return Some(SortSpec::ascending(field));
		};

		match (self, current.direction) {
			(_, SortDirection::Ascending) => Some(SortSpec::descending(field)),
			(Self::Cycle, _) => None,
			(Self::Toggle, _) => Some(SortSpec::ascending(field)),
		}
	}
}

/// Immutable snapshot of everything the user selected on a list screen.
///
/// Each user action produces a new value; the pipeline is a pure function of
/// the records and this state.
#[derive(Debug, Clone)]
pub struct ViewState<R: Record> {
	/// Raw search text as typed.
	pub search: String,
	pub filter: R::Filter,
	pub sort: Option<SortSpec<R::Field>>,
	/// Requested page, 1-based.
	pub page: usize,
}

impl<R: Record> Default for ViewState<R> {
	fn default() -> Self {
		Self {
			search: String::new(),
			filter: R::Filter::default(),
			sort: None,
			page: 1,
		}
	}
}

impl<R: Record> ViewState<R> {
	#[must_use]
	pub fn with_search(self, search: impl Into<String>) -> Self {
		Self {
			search: search.into(),
			..self
		}
	}

	#[must_use]
	pub fn with_filter(self, filter: R::Filter) -> Self {
		Self { filter, ..self }
	}

	#[must_use]
	pub fn with_sort(self, sort: Option<SortSpec<R::Field>>) -> Self {
		Self { sort, ..self }
	}

	#[must_use]
	pub fn with_page(self, page: usize) -> Self {
		Self {
			page: page.max(1),
			..self
		}
	}

	/// Search term as the pipeline compares it: trimmed and case-folded.
	pub fn needle(&self) -> String {
		self.search.trim().to_lowercase()
	}

	/// Sort currently applied, skipping a spec with no direction.
	pub fn active_sort(&self) -> Option<SortSpec<R::Field>> {
		self.sort.filter(SortSpec::is_active)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::OrderField;

	#[test]
	fn cycle_policy_walks_none_asc_desc_none() {
		let policy = SortPolicy::Cycle;
		let first = policy.next(None, OrderField::Amount);
		assert_eq!(first, Some(SortSpec::ascending(OrderField::Amount)));
		let second = policy.next(first, OrderField::Amount);
		assert_eq!(second, Some(SortSpec::descending(OrderField::Amount)));
		let third = policy.next(second, OrderField::Amount);
		assert_eq!(third, None);
	}

	#[test]
	fn switching_columns_restarts_ascending() {
		let policy = SortPolicy::Cycle;
		let current = Some(SortSpec::descending(OrderField::Amount));
		assert_eq!(
			policy.next(current, OrderField::Customer),
			Some(SortSpec::ascending(OrderField::Customer))
		);
	}

	#[test]
	fn toggle_policy_never_clears() {
		let policy = SortPolicy::Toggle;
		let current = Some(SortSpec::descending(OrderField::Date));
		assert_eq!(
			policy.next(current, OrderField::Date),
			Some(SortSpec::ascending(OrderField::Date))
		);
	}

	#[test]
	fn sort_specs_parse_with_optional_direction() {
		let spec: SortSpec<OrderField> = "amount:desc".parse().expect("parse");
		assert_eq!(spec, SortSpec::descending(OrderField::Amount));
		let spec: SortSpec<OrderField> = "Customer".parse().expect("parse");
		assert_eq!(spec, SortSpec::ascending(OrderField::Customer));
		assert_eq!(spec.to_string(), "customer:asc");

		let err = "weight".parse::<SortSpec<OrderField>>().unwrap_err();
		assert!(matches!(err, ParseError::UnknownField { .. }));
		let err = "amount:sideways".parse::<SortSpec<OrderField>>().unwrap_err();
		assert_eq!(err, ParseError::UnknownDirection("sideways".into()));
	}

	#[test]
	fn page_is_never_zero() {
		let state = ViewState::<crate::Order>::default().with_page(0);
		assert_eq!(state.page, 1);
	}
}
