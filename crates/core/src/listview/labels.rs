//! Closed value sets with a wire literal and a human label.

use std::fmt;

/// Enum with a fixed set of variants, a stable literal used in config files,
/// CLI flags and JSON, and a label used for display.
pub trait Labelled: Copy + Eq + fmt::Debug + 'static {
	/// Name of the value set used in error messages (`"status"`, `"role"`).
	const KIND: &'static str;

	/// Every variant in declaration order.
	fn variants() -> &'static [Self];

	/// Stable literal for the variant.
	fn as_str(self) -> &'static str;

	/// Human readable label for the variant.
	fn label(self) -> &'static str;

	/// Look up a variant by literal or label, ignoring case, spaces, `-` and `_`.
	fn lookup(value: &str) -> Option<Self> {
		let wanted = normalize(value);
		Self::variants()
			.iter()
			.copied()
			.find(|variant| normalize(variant.as_str()) == wanted || normalize(variant.label()) == wanted)
	}

	/// Literals of every variant, for error messages and help text.
	fn literals() -> Vec<&'static str> {
		Self::variants().iter().map(|variant| variant.as_str()).collect()
	}
}

fn normalize(value: &str) -> String {
	value
		.trim()
		.chars()
		.filter(|ch| !matches!(ch, ' ' | '-' | '_'))
		.flat_map(char::to_lowercase)
		.collect()
}

/// Declare a [`Labelled`] enum together with its `Display`, `FromStr` and
/// `Serialize` implementations.
macro_rules! labelled_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident ($kind:literal) {
			$( $(#[$vmeta:meta])* $variant:ident => ($literal:literal, $label:literal) ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$( $(#[$vmeta])* $variant ),+
		}

		impl $crate::listview::Labelled for $name {
			const KIND: &'static str = $kind;

			fn variants() -> &'static [Self] {
				&[$( Self::$variant ),+]
			}

			fn as_str(self) -> &'static str {
				match self {
					$( Self::$variant => $literal ),+
				}
			}

			fn label(self) -> &'static str {
				match self {
					$( Self::$variant => $label ),+
				}
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str($crate::listview::Labelled::label(*self))
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::ParseError;

			fn from_str(value: &str) -> Result<Self, Self::Err> {
				<Self as $crate::listview::Labelled>::lookup(value).ok_or_else(|| {
					$crate::ParseError::unknown_variant(
						$kind,
						value,
						&<Self as $crate::listview::Labelled>::literals(),
					)
				})
			}
		}

		impl ::serde::Serialize for $name {
			fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str($crate::listview::Labelled::as_str(*self))
			}
		}
	};
}

pub(crate) use labelled_enum;

#[cfg(test)]
mod tests {
	use super::*;

	labelled_enum! {
		enum Shade ("shade") {
			Light => ("light", "Light"),
			DarkGrey => ("darkGrey", "Dark Grey"),
		}
	}

	#[test]
	fn lookup_accepts_literal_and_label_in_any_case() {
		assert_eq!(Shade::lookup("darkGrey"), Some(Shade::DarkGrey));
		assert_eq!(Shade::lookup("dark grey"), Some(Shade::DarkGrey));
		assert_eq!(Shade::lookup("DARK_GREY"), Some(Shade::DarkGrey));
		assert_eq!(Shade::lookup(" light "), Some(Shade::Light));
		assert_eq!(Shade::lookup("navy"), None);
	}

	#[test]
	fn parse_errors_list_the_literals() {
		let err = "navy".parse::<Shade>().unwrap_err();
		let message = err.to_string();
		assert!(message.contains("unknown shade `navy`"));
		assert!(message.contains("light, darkGrey"));
	}

	#[test]
	fn display_uses_label_and_serialize_uses_literal() {
		assert_eq!(Shade::DarkGrey.to_string(), "Dark Grey");
		let json = serde_json::to_string(&Shade::DarkGrey).expect("json");
		assert_eq!(json, "\"darkGrey\"");
	}
}
