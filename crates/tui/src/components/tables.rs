use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers, already carrying any sort indicator.
	pub headers: Vec<Line<'a>>,
	pub widths: Vec<Constraint>,
	/// Rows of the current page.
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
	/// Shown centred under the header when `rows` is empty.
	pub empty_message: &'a str,
}

/// Render a bordered table with a header separator, or its empty state.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers)
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);

	let widths = if spec.widths.is_empty() {
		vec![Constraint::Fill(1)]
	} else {
		spec.widths
	};

	let is_empty = spec.rows.is_empty();
	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, theme);

	if is_empty {
		render_empty_message(frame, inner, spec.empty_message, theme);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	let width = usize::from(area.width);
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), theme.border_style());
	let line = Line::from(vec![Span::raw(" "), middle, Span::raw(" ")]);
	frame.render_widget(Paragraph::new(Text::from(line)), sep_rect);
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	if area.height <= TABLE_HEADER_ROWS || message.is_empty() {
		return;
	}
	let body = Rect {
		y: area.y + TABLE_HEADER_ROWS,
		height: area.height - TABLE_HEADER_ROWS,
		..area
	};
	let paragraph = Paragraph::new(Span::styled(message.to_string(), theme.empty_style()))
		.alignment(Alignment::Center);
	frame.render_widget(paragraph, body);
}
