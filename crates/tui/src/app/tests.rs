use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use storefront_core::Cart;
use storefront_core::catalog::seed;

use super::App;
use super::views::ListTab;
use crate::config::{Tab, UiOptions};

fn app_on(tab: Tab) -> App<'static> {
	let options = UiOptions {
		start: tab,
		..UiOptions::default()
	};
	App::new(&options)
}

fn press(app: &mut App<'_>, code: KeyCode, now: Instant) {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
}

fn ctrl(app: &mut App<'_>, ch: char) {
	app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL), Instant::now());
}

fn type_text(app: &mut App<'_>, text: &str, now: Instant) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch), now);
	}
}

fn render(app: &mut App<'_>) -> String {
	let backend = TestBackend::new(140, 30);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn line_index(screen: &str, needle: &str) -> usize {
	screen
		.lines()
		.position(|line| line.contains(needle))
		.unwrap_or_else(|| panic!("{needle:?} not on screen:\n{screen}"))
}

#[test]
fn products_render_sorted_by_name() {
	let mut app = app_on(Tab::Products);
	let screen = render(&mut app);

	assert!(screen.contains("Showing 6 of 6 products"));
	assert!(screen.contains("Name ↑"));
	assert!(line_index(&screen, "Fitness Smart Watch Lite") < line_index(&screen, "Wireless Headphones X200"));
}

#[test]
fn product_search_waits_for_the_quiet_period() {
	let mut app = app_on(Tab::Products);
	let start = Instant::now();

	type_text(&mut app, "cam", start);
	assert!(!app.pump_debounce(start + Duration::from_millis(100)));
	assert_eq!(app.products.state().search.as_str(), "");
	assert!(render(&mut app).contains("Searching…"));

	assert!(app.pump_debounce(start + Duration::from_millis(300)));
	assert_eq!(app.products.state().search.as_str(), "cam");
	assert!(render(&mut app).contains("Showing 2 of 2 products"));
}

#[test]
fn later_keystrokes_supersede_pending_search() {
	let mut app = app_on(Tab::Products);
	let start = Instant::now();

	type_text(&mut app, "watch", start);
	press(&mut app, KeyCode::Backspace, start + Duration::from_millis(200));
	assert!(!app.pump_debounce(start + Duration::from_millis(350)));
	assert!(app.pump_debounce(start + Duration::from_millis(500)));
	assert_eq!(app.products.state().search.as_str(), "watc");
}

#[test]
fn admin_search_applies_immediately() {
	let mut app = app_on(Tab::Customers);
	type_text(&mut app, "john", Instant::now());

	let screen = render(&mut app);
	assert!(screen.contains("Showing 2 of 2 customers"));
	assert!(screen.contains("John Smith"));
	assert!(screen.contains("Sarah Johnson"));
}

#[test]
fn orders_status_filter_cycles_from_all() {
	let mut app = app_on(Tab::Orders);
	ctrl(&mut app, 'f');

	let screen = render(&mut app);
	assert!(screen.contains("Status: Pending"));
	assert!(screen.contains("Showing 3 of 3 orders"));
	assert!(screen.contains("ORD-012"));
	assert!(!screen.contains("ORD-001"));
}

#[test]
fn unmatched_search_shows_empty_state() {
	let mut app = app_on(Tab::Orders);
	type_text(&mut app, "zzz", Instant::now());

	let screen = render(&mut app);
	assert!(screen.contains("No results"));
	assert!(screen.contains("Showing 0 of 0 orders"));
}

#[test]
fn function_keys_cycle_column_sort() {
	let mut app = app_on(Tab::Orders);
	let now = Instant::now();

	press(&mut app, KeyCode::F(2), now);
	assert!(render(&mut app).contains("Order ID ↑"));
	press(&mut app, KeyCode::F(2), now);
	assert!(render(&mut app).contains("Order ID ↓"));
	press(&mut app, KeyCode::F(2), now);
	assert!(render(&mut app).contains("Order ID ↕"));
	assert!(app.orders.state().active_sort().is_none());
}

#[test]
fn deleting_the_last_row_walks_back_a_page() {
	let mut app = app_on(Tab::Orders);
	let now = Instant::now();

	press(&mut app, KeyCode::Right, now);
	press(&mut app, KeyCode::Right, now);
	assert_eq!(app.orders.view().page, 3);

	press(&mut app, KeyCode::Delete, now);
	assert_eq!(app.orders.view().page, 3);
	press(&mut app, KeyCode::Delete, now);
	assert_eq!(app.orders.view().page, 2);
	assert_eq!(app.orders.records().len(), 10);
	assert!(render(&mut app).contains("Showing 5 of 10 orders"));
}

#[test]
fn products_cannot_be_deleted() {
	let mut app = app_on(Tab::Products);
	press(&mut app, KeyCode::Delete, Instant::now());

	assert_eq!(app.products.records().len(), 6);
	assert!(render(&mut app).contains("Products cannot be deleted"));
}

#[test]
fn tab_keys_wrap_between_screens() {
	let mut app = app_on(Tab::Products);
	let now = Instant::now();

	press(&mut app, KeyCode::BackTab, now);
	assert_eq!(app.tab(), Tab::Cart);
	press(&mut app, KeyCode::Tab, now);
	assert_eq!(app.tab(), Tab::Products);
}

#[test]
fn valid_promo_code_is_applied_and_cleared() {
	let mut app = app_on(Tab::Cart);
	type_text(&mut app, "save10", Instant::now());
	ctrl(&mut app, 'p');

	assert_eq!(app.cart().promo(), Some("SAVE10"));
	let screen = render(&mut app);
	assert!(screen.contains("Promo code SAVE10 applied"));
	assert!(screen.contains("(SAVE10)"));
}

#[test]
fn applied_promo_code_can_be_removed() {
	let mut app = app_on(Tab::Cart);
	type_text(&mut app, "SAVE10", Instant::now());
	ctrl(&mut app, 'p');
	ctrl(&mut app, 'u');

	assert_eq!(app.cart().promo(), None);
	let screen = render(&mut app);
	assert!(screen.contains("Promo code SAVE10 removed"));
	assert!(!screen.contains("(SAVE10)"));

	ctrl(&mut app, 'u');
	assert!(render(&mut app).contains("No promo code applied"));
}

#[test]
fn invalid_promo_code_is_reported() {
	let mut app = app_on(Tab::Cart);
	type_text(&mut app, "bogus", Instant::now());
	ctrl(&mut app, 'p');

	assert_eq!(app.cart().promo(), None);
	assert!(render(&mut app).contains("Invalid promo code: bogus"));
}

#[test]
fn cart_quantity_keys_adjust_the_selected_line() {
	let mut app = app_on(Tab::Cart);
	let now = Instant::now();

	press(&mut app, KeyCode::Char('+'), now);
	assert_eq!(app.cart().find("1").map(|item| item.quantity), Some(3));
	press(&mut app, KeyCode::Char('-'), now);
	press(&mut app, KeyCode::Char('-'), now);
	press(&mut app, KeyCode::Char('-'), now);
	assert_eq!(app.cart().find("1").map(|item| item.quantity), Some(1));
}

#[test]
fn out_of_stock_items_cannot_grow() {
	let mut app = app_on(Tab::Cart);
	let now = Instant::now();

	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Char('+'), now);

	assert_eq!(app.cart().find("3").map(|item| item.quantity), Some(1));
	assert!(render(&mut app).contains("Ergonomic Office Chair is out of stock"));
}

#[test]
fn removing_every_item_shows_the_empty_cart() {
	let mut app = app_on(Tab::Cart);
	let now = Instant::now();
	for _ in 0..3 {
		press(&mut app, KeyCode::Delete, now);
	}

	assert!(app.cart().is_empty());
	let screen = render(&mut app);
	assert!(screen.contains("Your cart is empty"));
	assert!(screen.contains("Press Tab to continue shopping"));
}

#[test]
fn empty_cart_renders_call_to_action() {
	let options = UiOptions {
		start: Tab::Cart,
		..UiOptions::default()
	};
	let mut app = App::with_data(
		&options,
		seed::products(),
		seed::orders(),
		seed::customers(),
		seed::transactions(),
		Cart::default(),
	);

	let screen = render(&mut app);
	assert!(screen.contains("Your cart is empty"));
	assert!(!screen.contains("Order total"));
}

#[test]
fn escape_quits() {
	let mut app = app_on(Tab::Orders);
	assert!(!app.should_quit());
	press(&mut app, KeyCode::Esc, Instant::now());
	assert!(app.should_quit());
}
