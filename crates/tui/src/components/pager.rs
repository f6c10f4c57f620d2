use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use storefront_core::PageMarker;

use crate::style::Theme;

/// What the pager line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
	pub markers: Vec<PageMarker>,
	pub current: usize,
	/// Rows on the current page.
	pub shown: usize,
	pub filtered: usize,
	/// Plural noun for the records (`orders`, `customers`).
	pub noun: &'static str,
}

/// `Showing 5 of 12 orders   ‹ 1 [2] 3 ›`
pub fn pager_line(state: &PagerState, theme: &Theme) -> Line<'static> {
	let mut spans = vec![Span::styled(
		format!("Showing {} of {} {}", state.shown, state.filtered, state.noun),
		theme.empty,
	)];

	let muted = |enabled: bool| {
		if enabled {
			theme.prompt
		} else {
			theme.empty
		}
	};
	let last = state.markers.iter().rev().find_map(|marker| match marker {
		PageMarker::Page(page) => Some(*page),
		PageMarker::Ellipsis => None,
	});

	spans.push(Span::raw("   "));
	spans.push(Span::styled("‹", muted(state.current > 1)));
	for marker in &state.markers {
		spans.push(Span::raw(" "));
		spans.push(match marker {
			PageMarker::Page(page) if *page == state.current => {
				Span::styled(format!("[{page}]"), theme.highlight)
			}
			PageMarker::Page(page) => Span::styled(page.to_string(), Style::default()),
			PageMarker::Ellipsis => Span::styled("…", theme.empty),
		});
	}
	spans.push(Span::raw(" "));
	spans.push(Span::styled(
		"›",
		muted(last.is_some_and(|last| state.current < last)),
	));

	Line::from(spans)
}

pub fn render_pager(frame: &mut Frame, area: Rect, state: &PagerState, theme: &Theme) {
	frame.render_widget(Paragraph::new(pager_line(state, theme)), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn current_page_is_bracketed() {
		let state = PagerState {
			markers: vec![PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)],
			current: 2,
			shown: 5,
			filtered: 12,
			noun: "orders",
		};
		let text: String = pager_line(&state, &Theme::default())
			.spans
			.iter()
			.map(|span| span.content.as_ref())
			.collect();
		assert_eq!(text, "Showing 5 of 12 orders   ‹ 1 [2] 3 ›");
	}
}
