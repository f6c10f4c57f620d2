use thiserror::Error;

/// Failure to turn user-supplied text into one of the closed value sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// The text does not name any variant of the target enum.
	#[error("unknown {kind} `{value}` (expected one of: {expected})")]
	UnknownVariant {
		kind: &'static str,
		value: String,
		expected: String,
	},
	/// A sort specification named a field the record does not have.
	#[error("unknown sort field `{field}` (expected one of: {expected})")]
	UnknownField { field: String, expected: String },
	/// A sort specification carried a direction other than `asc` or `desc`.
	#[error("unknown sort direction `{0}` (expected `asc` or `desc`)")]
	UnknownDirection(String),
}

impl ParseError {
	pub(crate) fn unknown_variant(
		kind: &'static str,
		value: impl Into<String>,
		expected: &[&str],
	) -> Self {
		Self::UnknownVariant {
			kind,
			value: value.into(),
			expected: expected.join(", "),
		}
	}
}
