use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub(super) struct Builtin {
	pub(super) name: &'static str,
	pub(super) aliases: &'static [&'static str],
	pub(super) theme: Theme,
}

pub(super) const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
};

pub(super) const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
};

pub(super) const BUILTINS: &[Builtin] = &[
	Builtin {
		name: "slate",
		aliases: &["dark", "default"],
		theme: SLATE,
	},
	Builtin {
		name: "light",
		aliases: &[],
		theme: LIGHT,
	},
];
