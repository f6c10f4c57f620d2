use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row};
use storefront_core::format::{format_currency, format_whole};
use storefront_core::{CartItem, CartSummary};

use super::App;
use crate::components::{
	CARD_HEIGHT, Card, TableSpec, render_cards, render_pager, render_table, render_tabs,
};
use crate::config::Tab;
use crate::style::Theme;

pub(crate) const EMPTY_CART: &str = "Your cart is empty";
const EMPTY_CART_HINT: &str = "Looks like you haven't added any items yet.";
const EMPTY_CART_ACTION: &str = "Press Tab to continue shopping";

const CART_COLUMNS: [(&str, Constraint); 6] = [
	("Item", Constraint::Fill(1)),
	("Category", Constraint::Length(14)),
	("Price", Constraint::Length(22)),
	("Qty", Constraint::Length(5)),
	("Total", Constraint::Length(11)),
	("", Constraint::Length(13)),
];

const LIST_HINT: &str = "Tab screens · ←/→ page · ↑/↓ select · F2.. sort · Ctrl+F filter · Ctrl+X reset · Esc quit";
const ADMIN_HINT: &str = "Tab screens · ←/→ page · ↑/↓ select · F2.. sort · Ctrl+F filter · Del delete · Esc quit";
const CUSTOMER_HINT: &str = "Tab screens · ←/→ page · F2.. sort · Ctrl+F gender · Ctrl+R role · Del delete · Esc quit";
const CART_HINT: &str = "Tab screens · ↑/↓ select · +/- quantity · Del remove · Ctrl+P apply promo · Ctrl+U remove promo · Esc quit";

impl App<'_> {
	/// Draw the whole frame for the current tab.
	pub fn draw(&mut self, frame: &mut Frame) {
		let theme = self.theme;
		let tab = self.tab;
		let [tabs_area, input_area, cards_area, table_area, pager_area, hint_area] =
			Layout::vertical([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(CARD_HEIGHT),
				Constraint::Min(3),
				Constraint::Length(1),
				Constraint::Length(1),
			])
			.areas(frame.area());

		render_tabs(frame, tabs_area, tab, &theme);
		self.input_mut(tab)
			.render(frame, input_area, tab.placeholder(), &theme);

		if let Some(list) = self.list(tab) {
			let cards = list.cards();
			let spec = list.table(&theme);
			let pager = list.pager();
			render_cards(frame, cards_area, &cards, &theme);
			render_table(frame, table_area, self.table_state_mut(tab), spec, &theme);
			render_pager(frame, pager_area, &pager, &theme);
		} else {
			self.draw_cart(frame, [cards_area, table_area, pager_area], &theme);
		}

		self.draw_hint(frame, hint_area, &theme);
	}

	fn draw_cart(&mut self, frame: &mut Frame, areas: [Rect; 3], theme: &Theme) {
		let [cards_area, table_area, footer_area] = areas;
		if self.cart.is_empty() {
			render_empty_cart(frame, table_area, theme);
			return;
		}

		let summary = self.cart.summary();
		let cards = cart_cards(&summary, self.cart.promo());
		render_cards(frame, cards_area, &cards, theme);

		let spec = TableSpec {
			headers: CART_COLUMNS.iter().map(|(title, _)| Line::from(*title)).collect(),
			widths: CART_COLUMNS.iter().map(|(_, width)| *width).collect(),
			rows: self.cart.items().iter().map(cart_row).collect(),
			title: Some(format!(" Shopping Cart · {} items ", self.cart.items().len())),
			empty_message: EMPTY_CART,
		};
		render_table(frame, table_area, self.table_state_mut(Tab::Cart), spec, theme);

		let footer = Line::from(vec![
			Span::styled("Order total ", theme.empty),
			Span::styled(format_currency(summary.total), theme.highlight),
		]);
		frame.render_widget(Paragraph::new(footer), footer_area);
	}

	fn draw_hint(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let line = match &self.status {
			Some(status) if status.is_error => Line::from(Span::styled(
				status.text.clone(),
				Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
			)),
			Some(status) => Line::from(Span::styled(status.text.clone(), theme.highlight)),
			None if self.tab == Tab::Products && self.search_debounce.is_pending() => {
				Line::from(Span::styled("Searching…", theme.empty_style()))
			}
			None => Line::from(Span::styled(hint_for(self.tab), theme.empty)),
		};
		frame.render_widget(Paragraph::new(line), area);
	}
}

fn hint_for(tab: Tab) -> &'static str {
	match tab {
		Tab::Products => LIST_HINT,
		Tab::Orders | Tab::Transactions => ADMIN_HINT,
		Tab::Customers => CUSTOMER_HINT,
		Tab::Cart => CART_HINT,
	}
}

fn cart_cards(summary: &CartSummary, promo: Option<&str>) -> Vec<Card> {
	let discount = match promo {
		Some(code) => format!("-{} ({code})", format_currency(summary.discount)),
		None => format_currency(0.0),
	};
	let shipping = if summary.shipping > 0.0 {
		format_currency(summary.shipping)
	} else {
		"Free".to_string()
	};
	vec![
		Card::new("Items", format_whole(f64::from(summary.units))),
		Card::new("Subtotal", format_currency(summary.subtotal)),
		Card::new("Discount", discount),
		Card::new("Tax (18%)", format_currency(summary.tax)),
		Card::new("Shipping", shipping),
		Card::new("Total", format_currency(summary.total)),
	]
}

fn cart_row(item: &CartItem) -> Row<'static> {
	let price = match item.original_price {
		Some(original) => format!("{} (was {})", format_currency(item.price), format_currency(original)),
		None => format_currency(item.price),
	};
	let availability = if item.in_stock { "" } else { "Out of stock" };
	Row::new([
		Cell::from(item.name.clone()),
		Cell::from(item.category.clone()),
		Cell::from(price),
		Cell::from(item.quantity.to_string()),
		Cell::from(format_currency(item.line_total())),
		Cell::from(availability),
	])
}

fn render_empty_cart(frame: &mut Frame, area: Rect, theme: &Theme) {
	let [_, body] = Layout::vertical([Constraint::Percentage(30), Constraint::Fill(1)]).areas(area);
	let message = Paragraph::new(vec![
		Line::from(Span::styled(EMPTY_CART, theme.highlight.add_modifier(Modifier::BOLD))),
		Line::from(Span::styled(EMPTY_CART_HINT, theme.empty_style())),
		Line::from(""),
		Line::from(Span::styled(EMPTY_CART_ACTION, theme.prompt)),
	])
	.alignment(Alignment::Center);
	frame.render_widget(message, body);
}
