//! Colour themes for the terminal UI.

mod themes;

use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table headers, borders and separators.
	pub header: Style,
	/// Selected table row.
	pub row_highlight: Style,
	/// Search input and key hints.
	pub prompt: Style,
	/// Empty states and placeholders.
	pub empty: Style,
	/// Active sort column, active page and summary figures.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new()
			.bg(self.header.bg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Foreground-only header style, for borders drawn over any background.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty.add_modifier(Modifier::ITALIC)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	themes::SLATE
}

/// Look up a built-in theme by name or alias, ignoring case and `-`/`_`.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	themes::BUILTINS
		.iter()
		.find(|builtin| {
			normalize_name(builtin.name) == wanted
				|| builtin.aliases.iter().any(|alias| normalize_name(alias) == wanted)
		})
		.map(|builtin| builtin.theme)
}

/// Names of the built-in themes, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = themes::BUILTINS.iter().map(|builtin| builtin.name).collect();
	names.sort_unstable();
	names
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}
