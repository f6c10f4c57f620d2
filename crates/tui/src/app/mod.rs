mod actions;
mod render;
#[cfg(test)]
mod tests;
mod views;

use std::time::Instant;

use ratatui::widgets::TableState;
use storefront_core::catalog::seed;
use storefront_core::{
	Cart, Customer, Debouncer, ListScreen, Order, Product, Transaction, customer_screen,
	order_screen, product_screen, transaction_screen,
};
use tracing::debug;

use self::views::ListTab;
use crate::components::SearchInput;
use crate::config::{Tab, UiOptions};
use crate::style::Theme;

/// Transient message shown on the hint line until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
	pub text: String,
	pub is_error: bool,
}

/// State of the interactive storefront: one list screen per admin tab, the
/// product search, the cart, and the inputs that edit them.
pub struct App<'a> {
	pub(crate) tab: Tab,
	pub(crate) products: ListScreen<Product>,
	pub(crate) orders: ListScreen<Order>,
	pub(crate) customers: ListScreen<Customer>,
	pub(crate) transactions: ListScreen<Transaction>,
	pub(crate) cart: Cart,
	inputs: [SearchInput<'a>; Tab::ALL.len()],
	tables: [TableState; Tab::ALL.len()],
	/// Product search text waiting out the quiet period.
	pub(crate) search_debounce: Debouncer<String>,
	pub(crate) status: Option<StatusMessage>,
	pub(crate) theme: Theme,
	pub(crate) should_quit: bool,
}

impl<'a> App<'a> {
	/// Build the app over the bundled seed collections.
	pub fn new(options: &UiOptions) -> Self {
		Self::with_data(
			options,
			seed::products(),
			seed::orders(),
			seed::customers(),
			seed::transactions(),
			Cart::new(seed::cart_items()),
		)
	}

	pub fn with_data(
		options: &UiOptions,
		products: Vec<Product>,
		orders: Vec<Order>,
		customers: Vec<Customer>,
		transactions: Vec<Transaction>,
		cart: Cart,
	) -> Self {
		let mut app = Self {
			tab: options.start,
			products: product_screen(products, options.products_page_size),
			orders: order_screen(orders, options.admin_page_size),
			customers: customer_screen(customers, options.admin_page_size),
			transactions: transaction_screen(transactions, options.admin_page_size),
			cart,
			inputs: Default::default(),
			tables: Default::default(),
			search_debounce: Debouncer::new(options.debounce),
			status: None,
			theme: options.theme,
			should_quit: false,
		};
		app.sync_selection();
		app
	}

	pub fn tab(&self) -> Tab {
		self.tab
	}

	pub fn cart(&self) -> &Cart {
		&self.cart
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Apply product search text once it has been stable for the debounce
	/// delay. Returns whether anything changed.
	pub fn pump_debounce(&mut self, now: Instant) -> bool {
		let Some(text) = self.search_debounce.poll(now) else {
			return false;
		};
		debug!(search = %text, "applying debounced product search");
		self.products.search(&text);
		self.sync_selection();
		true
	}

	pub(crate) fn input(&self, tab: Tab) -> &SearchInput<'a> {
		&self.inputs[tab.index()]
	}

	pub(crate) fn input_mut(&mut self, tab: Tab) -> &mut SearchInput<'a> {
		&mut self.inputs[tab.index()]
	}

	pub(crate) fn table_state(&self, tab: Tab) -> &TableState {
		&self.tables[tab.index()]
	}

	pub(crate) fn table_state_mut(&mut self, tab: Tab) -> &mut TableState {
		&mut self.tables[tab.index()]
	}

	/// The list screen behind `tab`, or `None` for the cart.
	pub(crate) fn list(&self, tab: Tab) -> Option<&dyn ListTab> {
		match tab {
			Tab::Products => Some(&self.products),
			Tab::Orders => Some(&self.orders),
			Tab::Customers => Some(&self.customers),
			Tab::Transactions => Some(&self.transactions),
			Tab::Cart => None,
		}
	}

	pub(crate) fn list_mut(&mut self, tab: Tab) -> Option<&mut dyn ListTab> {
		match tab {
			Tab::Products => Some(&mut self.products),
			Tab::Orders => Some(&mut self.orders),
			Tab::Customers => Some(&mut self.customers),
			Tab::Transactions => Some(&mut self.transactions),
			Tab::Cart => None,
		}
	}

	/// Rows the current tab shows.
	pub(crate) fn row_count(&self) -> usize {
		self.list(self.tab)
			.map_or_else(|| self.cart.items().len(), |list| list.row_count())
	}

	/// Keep the selected row inside the current tab's rows.
	pub(crate) fn sync_selection(&mut self) {
		let rows = self.row_count();
		let tab = self.tab;
		let state = self.table_state_mut(tab);
		if rows == 0 {
			state.select(None);
			return;
		}
		let selected = state.selected().unwrap_or(0).min(rows - 1);
		state.select(Some(selected));
	}

	pub(crate) fn set_status(&mut self, text: impl Into<String>) {
		self.status = Some(StatusMessage {
			text: text.into(),
			is_error: false,
		});
	}

	pub(crate) fn set_error(&mut self, text: impl Into<String>) {
		self.status = Some(StatusMessage {
			text: text.into(),
			is_error: true,
		});
	}
}
