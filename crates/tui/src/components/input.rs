//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use tui_textarea::TextArea;

use crate::style::Theme;

/// Search or promo-code input for one tab.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		Self { textarea }
	}
}

impl SearchInput<'_> {
	/// Current text of the single line.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map_or("", String::as_str)
	}

	/// Feed a key press. Returns whether the text changed.
	///
	/// Newlines are swallowed so the input stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
		{
			return false;
		}
		self.textarea.input(key)
	}

	/// Replace the whole text.
	pub fn set_text(&mut self, text: &str) {
		self.textarea.select_all();
		self.textarea.cut();
		self.textarea.insert_str(text);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Draw the prompt, the text and, while empty, the placeholder.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, placeholder: &str, theme: &Theme) {
		if area.width < 3 || area.height == 0 {
			return;
		}

		let prompt = Rect { width: 2, ..area };
		frame.render_widget(Span::styled("> ", theme.prompt), prompt);

		let field = Rect {
			x: area.x + 2,
			width: area.width - 2,
			height: 1,
			..area
		};
		self.textarea.set_style(theme.prompt);
		frame.render_widget(&self.textarea, field);

		if self.text().is_empty() {
			render_placeholder(frame, field, placeholder, theme);
		}
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if text.is_empty() {
		return;
	}
	// Leave the cursor cell visible.
	let start = area.x.saturating_add(1);
	let width = area.width.saturating_sub(1);
	let display: String = text.chars().take(usize::from(width)).collect();
	frame.buffer_mut().set_line(
		start,
		area.y,
		&Line::from(Span::styled(display, theme.empty_style())),
		width,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(input: &mut SearchInput<'_>, code: KeyCode) -> bool {
		input.input(KeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn typing_and_backspace_edit_the_text() {
		let mut input = SearchInput::default();
		assert!(press(&mut input, KeyCode::Char('j')));
		assert!(press(&mut input, KeyCode::Char('o')));
		assert_eq!(input.text(), "jo");
		assert!(press(&mut input, KeyCode::Backspace));
		assert_eq!(input.text(), "j");
	}

	#[test]
	fn enter_does_not_start_a_new_line() {
		let mut input = SearchInput::default();
		press(&mut input, KeyCode::Char('a'));
		assert!(!press(&mut input, KeyCode::Enter));
		assert_eq!(input.text(), "a");
	}

	#[test]
	fn set_text_replaces_everything() {
		let mut input = SearchInput::default();
		input.set_text("save10");
		assert_eq!(input.text(), "save10");
		input.clear();
		assert_eq!(input.text(), "");
	}
}
