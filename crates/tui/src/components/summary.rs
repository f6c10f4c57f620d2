//! Summary card strip shown above each table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::style::Theme;

/// One labelled figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
	pub label: &'static str,
	pub value: String,
}

impl Card {
	pub fn new(label: &'static str, value: impl Into<String>) -> Self {
		Self {
			label,
			value: value.into(),
		}
	}
}

/// Height the strip needs: borders plus label and value lines.
pub const CARD_HEIGHT: u16 = 4;

/// Render `cards` side by side in equal widths.
pub fn render_cards(frame: &mut Frame, area: Rect, cards: &[Card], theme: &Theme) {
	if cards.is_empty() || area.height == 0 {
		return;
	}

	let constraints = cards.iter().map(|_| Constraint::Fill(1));
	let areas = Layout::horizontal(constraints).spacing(1).split(area);
	for (card, card_area) in cards.iter().zip(areas.iter()) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style());
		let body = Paragraph::new(vec![
			Line::from(Span::styled(card.label, theme.empty)),
			Line::from(Span::styled(card.value.clone(), theme.highlight)),
		])
		.block(block);
		frame.render_widget(body, *card_area);
	}
}
