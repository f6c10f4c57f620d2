//! Runs one screen non-interactively, or hands over to the terminal UI.

use anyhow::{Result, ensure};
use storefront_core::{
	Cart, CustomerFilter, ListAction, ListScreen, OrderFilter, PriceRange, ProductFilter,
	SortSpec, TransactionFilter, customer_screen, order_screen, product_screen, seed,
	transaction_screen,
};
use tracing::{debug, info};

use crate::cli::{
	CartArgs, Command, CustomerArgs, OrderArgs, OutputFormat, PageArgs, PlainRow, ProductArgs,
	TransactionArgs, print_cart, print_page,
};
use crate::settings::ResolvedConfig;

/// Execute `command`; `None` opens the interactive browser.
pub(crate) fn run(command: Option<Command>, format: OutputFormat, config: &ResolvedConfig) -> Result<()> {
	match command {
		Some(Command::Products(args)) => products(args, format, config),
		Some(Command::Orders(args)) => orders(args, format, config),
		Some(Command::Customers(args)) => customers(args, format, config),
		Some(Command::Transactions(args)) => transactions(args, format, config),
		Some(Command::Cart(args)) => cart(&args, format),
		Some(Command::Browse(_)) | None => browse(config),
	}
}

fn products(args: ProductArgs, format: OutputFormat, config: &ResolvedConfig) -> Result<()> {
	let screen = product_screen(seed::products(), config.products_page_size);

	let spanning = screen.state().filter.price;
	let price = match (args.min_price, args.max_price, spanning) {
		(None, None, spanning) => spanning,
		(min, max, Some(range)) => Some(PriceRange::new(
			min.unwrap_or(range.min),
			max.unwrap_or(range.max),
		)),
		(min, max, None) => Some(PriceRange::new(
			min.unwrap_or(0.0),
			max.unwrap_or(f64::MAX),
		)),
	};
	let filter = ProductFilter {
		category: args.category,
		price,
	};

	run_list(screen, &[], &args.list, filter, args.sort, format)
}

fn orders(args: OrderArgs, format: OutputFormat, config: &ResolvedConfig) -> Result<()> {
	let screen = order_screen(seed::orders(), config.admin_page_size);
	let filter = OrderFilter {
		status: args.status,
	};
	run_list(screen, &args.delete, &args.list, filter, args.sort, format)
}

fn customers(args: CustomerArgs, format: OutputFormat, config: &ResolvedConfig) -> Result<()> {
	let screen = customer_screen(seed::customers(), config.admin_page_size);
	let filter = CustomerFilter {
		gender: args.gender,
		role: args.role,
	};
	run_list(screen, &args.delete, &args.list, filter, args.sort, format)
}

fn transactions(args: TransactionArgs, format: OutputFormat, config: &ResolvedConfig) -> Result<()> {
	let screen = transaction_screen(seed::transactions(), config.admin_page_size);
	let filter = TransactionFilter {
		status: args.status,
	};
	run_list(screen, &args.delete, &args.list, filter, args.sort, format)
}

/// Deletes come first so the remaining criteria see the shrunken collection.
fn run_list<R: PlainRow>(
	screen: ListScreen<R>,
	deletes: &[String],
	list: &PageArgs,
	filter: R::Filter,
	sort: Option<SortSpec<R::Field>>,
	format: OutputFormat,
) -> Result<()> {
	let screen = build_list(screen, deletes, list, filter, sort)?;
	let view = screen.view();
	info!(
		screen = R::SCREEN,
		page = view.page,
		total_pages = view.total_pages,
		matches = view.filtered_count,
		"rendered list screen"
	);
	print_page(format, &view, screen.state())
}

fn build_list<R: PlainRow>(
	mut screen: ListScreen<R>,
	deletes: &[String],
	list: &PageArgs,
	filter: R::Filter,
	sort: Option<SortSpec<R::Field>>,
) -> Result<ListScreen<R>> {
	for id in deletes {
		ensure!(screen.find(id).is_some(), "no {} record with id `{id}`", R::SCREEN);
		screen = screen.apply(ListAction::Delete(id.clone()));
		debug!(screen = R::SCREEN, id, "deleted record");
	}

	if let Some(search) = &list.search {
		screen = screen.apply(ListAction::Search(search.clone()));
	}
	screen = screen.apply(ListAction::Filter(filter));
	if sort.is_some() {
		screen = screen.apply(ListAction::SortBy(sort));
	}
	if let Some(page) = list.page {
		screen = screen.apply(ListAction::GoTo(page));
	}
	Ok(screen)
}

fn cart(args: &CartArgs, format: OutputFormat) -> Result<()> {
	let mut cart = Cart::new(seed::cart_items());

	for id in &args.delete {
		ensure!(cart.find(id).is_some(), "no cart item with id `{id}`");
		cart = cart.remove(id);
	}
	for update in &args.quantities {
		ensure!(cart.find(&update.id).is_some(), "no cart item with id `{}`", update.id);
		cart = cart.update_quantity(&update.id, update.quantity);
	}

	let (cart, outcome) = match &args.promo {
		Some(code) => {
			let (cart, outcome) = cart.apply_promo(code);
			(cart, Some(outcome))
		}
		None => (cart, None),
	};

	print_cart(format, &cart, outcome.as_ref())
}

fn browse(config: &ResolvedConfig) -> Result<()> {
	storefront_tui::run(&config.ui_options())
}

#[cfg(test)]
mod tests {
	use storefront_core::{Choice, Order, OrderField, OrderStatus};

	use super::*;

	fn page(search: Option<&str>, page: Option<usize>) -> PageArgs {
		PageArgs {
			search: search.map(str::to_string),
			page,
		}
	}

	fn ids(screen: &ListScreen<Order>) -> Vec<String> {
		screen.view().records.iter().map(|order| order.id.clone()).collect()
	}

	#[test]
	fn deletes_run_before_the_page_is_chosen() {
		let deletes = vec!["ORD-011".to_string(), "ORD-012".to_string()];
		let screen = build_list(
			order_screen(seed::orders(), 5),
			&deletes,
			&page(None, Some(3)),
			OrderFilter::default(),
			None,
		)
		.unwrap();

		assert_eq!(screen.view().total_pages, 2);
		assert_eq!(screen.view().page, 2);
		assert_eq!(ids(&screen), ["ORD-006", "ORD-007", "ORD-008", "ORD-009", "ORD-010"]);
	}

	#[test]
	fn unknown_delete_id_is_an_error() {
		let err = build_list(
			order_screen(seed::orders(), 5),
			&["ORD-999".to_string()],
			&PageArgs::default(),
			OrderFilter::default(),
			None,
		)
		.unwrap_err();
		assert!(err.to_string().contains("ORD-999"));
	}

	#[test]
	fn explicit_sort_and_filter_combine() {
		let screen = build_list(
			order_screen(seed::orders(), 5),
			&[],
			&PageArgs::default(),
			OrderFilter {
				status: Choice::Only(OrderStatus::Completed),
			},
			Some(SortSpec::descending(OrderField::Amount)),
		)
		.unwrap();

		assert_eq!(ids(&screen), ["ORD-009", "ORD-002", "ORD-011", "ORD-006"]);
	}

	#[test]
	fn search_narrows_before_paging() {
		let screen = build_list(
			order_screen(seed::orders(), 5),
			&[],
			&page(Some("ord-01"), Some(4)),
			OrderFilter::default(),
			None,
		)
		.unwrap();

		assert_eq!(screen.view().page, 1);
		assert_eq!(ids(&screen), ["ORD-010", "ORD-011", "ORD-012"]);
	}
}
