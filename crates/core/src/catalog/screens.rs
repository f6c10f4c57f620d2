//! Per-screen list configuration.

use super::{Customer, Order, Product, ProductField, ProductFilter, Transaction, TransactionField};
use crate::listview::{Choice, ListScreen, PriceRange, SortPolicy, SortSpec, ViewState};

/// Product search: name order by default, price window spanning the data, and
/// any change of criteria returns to the first page.
pub fn product_screen(products: Vec<Product>, page_size: usize) -> ListScreen<Product> {
	let price = PriceRange::spanning(products.iter().map(|product| product.price));
	let initial = ViewState::default()
		.with_filter(ProductFilter {
			category: Choice::All,
			price,
		})
		.with_sort(Some(SortSpec::ascending(ProductField::Name)));

	ListScreen::new(products, page_size)
		.resetting_page_on_change()
		.with_initial_state(initial)
}

pub fn order_screen(orders: Vec<Order>, page_size: usize) -> ListScreen<Order> {
	ListScreen::new(orders, page_size)
}

pub fn customer_screen(customers: Vec<Customer>, page_size: usize) -> ListScreen<Customer> {
	ListScreen::new(customers, page_size)
}

/// Transactions are always sorted, newest first until a header is chosen.
pub fn transaction_screen(transactions: Vec<Transaction>, page_size: usize) -> ListScreen<Transaction> {
	let initial = ViewState::default().with_sort(Some(SortSpec::descending(TransactionField::Date)));
	ListScreen::new(transactions, page_size)
		.with_sort_policy(SortPolicy::Toggle)
		.with_initial_state(initial)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::listview::ListAction;
	use crate::{Category, seed};

	#[test]
	fn products_start_sorted_by_name_over_the_full_price_span() {
		let screen = product_screen(seed::products(), 8);
		let view = screen.view();
		assert_eq!(view.filtered_count, 6);
		let names: Vec<_> = view.records.iter().map(|product| product.name.as_str()).collect();
		assert_eq!(names.first(), Some(&"Fitness Smart Watch Lite"));
		assert_eq!(names.last(), Some(&"Wireless Headphones X200"));
		assert_eq!(
			screen.state().filter.price,
			Some(PriceRange::new(119.0, 899.0))
		);
	}

	#[test]
	fn product_category_filter_keeps_price_window() {
		let screen = product_screen(seed::products(), 2).apply(ListAction::GoTo(3));
		assert_eq!(screen.state().page, 3);

		let filter = ProductFilter {
			category: Choice::Only(Category::Headphone),
			..screen.state().filter
		};
		let screen = screen.apply(ListAction::Filter(filter));
		assert_eq!(screen.state().page, 1);
		assert_eq!(screen.view().filtered_count, 2);
	}

	#[test]
	fn transactions_default_to_newest_first_and_toggle() {
		let screen = transaction_screen(seed::transactions(), 5);
		let first = screen.view().records.first().map(|txn| txn.id.clone());
		assert_eq!(first.as_deref(), Some("txn_001"));

		let screen = screen.apply(ListAction::Sort(TransactionField::Date));
		assert_eq!(
			screen.state().sort,
			Some(SortSpec::ascending(TransactionField::Date))
		);
		let screen = screen.apply(ListAction::Sort(TransactionField::Date));
		assert_eq!(
			screen.state().sort,
			Some(SortSpec::descending(TransactionField::Date))
		);
	}
}
