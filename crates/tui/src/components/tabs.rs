use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::Tab;
use crate::style::Theme;

/// Render the screen selector with `current` highlighted.
pub fn render_tabs(frame: &mut Frame, area: Rect, current: Tab, theme: &Theme) {
	let titles = Tab::ALL
		.iter()
		.map(|tab| Line::from(format!(" {} ", tab.label())));
	let tabs = Tabs::new(titles)
		.select(current.index())
		.style(theme.tab_inactive_style())
		.highlight_style(theme.tab_highlight_style())
		.divider("")
		.padding("", "");
	frame.render_widget(tabs, area);
}
