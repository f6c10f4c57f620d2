//! How each record type is laid out as a table, and the type-erased list tab
//! the app drives key presses through.

use ratatui::layout::Constraint;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use storefront_core::format::{format_currency, format_whole};
use storefront_core::{
	Customer, CustomerField, Labelled, ListAction, ListScreen, Order, OrderField, PageView,
	Product, ProductField, Record, SortDirection, SortSpec, Transaction, TransactionField,
	ViewState,
};

use crate::components::{Card, PagerState, TableSpec};
use crate::style::Theme;

pub(crate) const NO_RESULTS: &str = "No results";

/// One table column and the field its header sorts by, if any.
pub(crate) struct Column<F> {
	pub title: &'static str,
	pub sort: Option<F>,
	pub width: Constraint,
}

const fn column<F>(title: &'static str, sort: Option<F>, width: Constraint) -> Column<F> {
	Column { title, sort, width }
}

/// Table presentation for a record type.
pub(crate) trait TableView: Record + 'static {
	/// Plural noun used on the pager line.
	const NOUN: &'static str;
	const TITLE: &'static str;
	const COLUMNS: &'static [Column<Self::Field>];
	/// Whether the screen offers a delete action per row.
	const DELETABLE: bool = true;

	/// One string per column in [`Self::COLUMNS`].
	fn cells(&self) -> Vec<String>;

	/// Advance the primary (or, for screens with two, the secondary)
	/// categorical filter.
	fn cycle_filter(filter: Self::Filter, secondary: bool) -> Self::Filter;

	fn describe_filter(filter: &Self::Filter) -> String;

	fn cards(view: &PageView<'_, Self>, state: &ViewState<Self>) -> Vec<Card>;
}

impl TableView for Product {
	const NOUN: &'static str = "products";
	const TITLE: &'static str = "Products";
	const COLUMNS: &'static [Column<ProductField>] = &[
		column("Name", Some(ProductField::Name), Constraint::Fill(1)),
		column("Category", None, Constraint::Length(14)),
		column("Price", Some(ProductField::Price), Constraint::Length(10)),
		column("Rating", Some(ProductField::Rating), Constraint::Length(9)),
		column("Reviews", Some(ProductField::Reviews), Constraint::Length(10)),
		column("Stock", None, Constraint::Length(13)),
	];
	const DELETABLE: bool = false;

	fn cells(&self) -> Vec<String> {
		let name = if self.is_new {
			format!("{} (new)", self.name)
		} else {
			self.name.clone()
		};
		let price = match (self.original_price, self.discount) {
			(Some(_), Some(discount)) => format!("{} -{discount}%", format_currency(self.price)),
			_ => format_currency(self.price),
		};
		vec![
			name,
			self.category.label().to_string(),
			price,
			format!("{:.1}", self.rating),
			format_whole(f64::from(self.reviews)),
			self.stock_status().label().to_string(),
		]
	}

	fn cycle_filter(mut filter: Self::Filter, _secondary: bool) -> Self::Filter {
		filter.category = filter.category.cycle();
		filter
	}

	fn describe_filter(filter: &Self::Filter) -> String {
		format!("Category: {}", filter.category.label())
	}

	fn cards(view: &PageView<'_, Self>, state: &ViewState<Self>) -> Vec<Card> {
		let window = state.filter.price.map_or_else(
			|| "Any".to_string(),
			|range| format!("{} - {}", format_currency(range.min), format_currency(range.max)),
		);
		vec![
			Card::new("Results", view.filtered_count.to_string()),
			Card::new("Category", state.filter.category.label()),
			Card::new("Price range", window),
		]
	}
}

impl TableView for Order {
	const NOUN: &'static str = "orders";
	const TITLE: &'static str = "Order Management";
	const COLUMNS: &'static [Column<OrderField>] = &[
		column("Order ID", Some(OrderField::Id), Constraint::Length(11)),
		column("Customer", None, Constraint::Fill(1)),
		column("Qty", Some(OrderField::Quantity), Constraint::Length(6)),
		column("Discount", Some(OrderField::Discount), Constraint::Length(11)),
		column("Amount", Some(OrderField::Amount), Constraint::Length(11)),
		column("Status", Some(OrderField::Status), Constraint::Length(12)),
		column("Date", None, Constraint::Length(11)),
	];

	fn cells(&self) -> Vec<String> {
		vec![
			self.id.clone(),
			self.customer.clone(),
			self.quantity.to_string(),
			format_currency(self.discount),
			format_currency(self.amount),
			self.status.label().to_string(),
			self.date.clone(),
		]
	}

	fn cycle_filter(mut filter: Self::Filter, _secondary: bool) -> Self::Filter {
		filter.status = filter.status.cycle();
		filter
	}

	fn describe_filter(filter: &Self::Filter) -> String {
		format!("Status: {}", filter.status.label())
	}

	fn cards(view: &PageView<'_, Self>, _state: &ViewState<Self>) -> Vec<Card> {
		vec![
			Card::new("Total Orders", view.filtered_count.to_string()),
			Card::new("Total Amount", format_currency(view.totals.get(OrderField::Amount))),
			Card::new("Total Discounts", format_currency(view.totals.get(OrderField::Discount))),
			Card::new("Total Items", format_whole(view.totals.get(OrderField::Quantity))),
		]
	}
}

impl TableView for Customer {
	const NOUN: &'static str = "customers";
	const TITLE: &'static str = "Customer Management";
	const COLUMNS: &'static [Column<CustomerField>] = &[
		column("", None, Constraint::Length(3)),
		column("Name", Some(CustomerField::Name), Constraint::Length(16)),
		column("Email", Some(CustomerField::Email), Constraint::Fill(1)),
		column("Gender", Some(CustomerField::Gender), Constraint::Length(9)),
		column("Role", Some(CustomerField::Role), Constraint::Length(8)),
	];

	fn cells(&self) -> Vec<String> {
		vec![
			self.initials(),
			self.name.clone(),
			self.email.clone(),
			self.gender.label().to_string(),
			self.role.label().to_string(),
		]
	}

	fn cycle_filter(mut filter: Self::Filter, secondary: bool) -> Self::Filter {
		if secondary {
			filter.role = filter.role.cycle();
		} else {
			filter.gender = filter.gender.cycle();
		}
		filter
	}

	fn describe_filter(filter: &Self::Filter) -> String {
		format!("Gender: {} · Role: {}", filter.gender.label(), filter.role.label())
	}

	fn cards(view: &PageView<'_, Self>, state: &ViewState<Self>) -> Vec<Card> {
		vec![
			Card::new("Customers", view.filtered_count.to_string()),
			Card::new("Gender", state.filter.gender.label()),
			Card::new("Role", state.filter.role.label()),
		]
	}
}

impl TableView for Transaction {
	const NOUN: &'static str = "transactions";
	const TITLE: &'static str = "Transaction List";
	const COLUMNS: &'static [Column<TransactionField>] = &[
		column("Transaction", None, Constraint::Length(11)),
		column("User", None, Constraint::Fill(1)),
		column("Amount", Some(TransactionField::Amount), Constraint::Length(11)),
		column("Discount", Some(TransactionField::Discount), Constraint::Length(11)),
		column("Qty", Some(TransactionField::Quantity), Constraint::Length(6)),
		column("Status", Some(TransactionField::Status), Constraint::Length(11)),
		column("Date", Some(TransactionField::Date), Constraint::Length(12)),
	];

	fn cells(&self) -> Vec<String> {
		vec![
			self.id.clone(),
			self.user.clone(),
			format_currency(self.amount),
			format_currency(self.discount),
			self.quantity.to_string(),
			self.status.label().to_string(),
			self.date.clone(),
		]
	}

	fn cycle_filter(mut filter: Self::Filter, _secondary: bool) -> Self::Filter {
		filter.status = filter.status.cycle();
		filter
	}

	fn describe_filter(filter: &Self::Filter) -> String {
		format!("Status: {}", filter.status.label())
	}

	fn cards(view: &PageView<'_, Self>, _state: &ViewState<Self>) -> Vec<Card> {
		vec![
			Card::new("Total Transactions", view.filtered_count.to_string()),
			Card::new("Total Amount", format_currency(view.totals.get(TransactionField::Amount))),
			Card::new(
				"Total Discounts",
				format_currency(view.totals.get(TransactionField::Discount)),
			),
		]
	}
}

/// The operations the app performs on whichever list tab is active.
pub(crate) trait ListTab {
	fn search(&mut self, text: &str);
	fn page(&mut self, forward: bool);
	/// Activate the `index`th sortable column. Returns a status message.
	fn sort_column(&mut self, index: usize) -> Option<String>;
	/// Returns the new filter description.
	fn cycle_filter(&mut self, secondary: bool) -> String;
	/// Delete the record shown at `row` on the current page, returning its id.
	fn delete_row(&mut self, row: usize) -> Option<String>;
	fn reset(&mut self);
	fn row_count(&self) -> usize;
	fn cards(&self) -> Vec<Card>;
	fn table(&self, theme: &Theme) -> TableSpec<'static>;
	fn pager(&self) -> PagerState;
}

fn dispatch<R: Record>(screen: &mut ListScreen<R>, action: ListAction<R>) {
	*screen = std::mem::take(screen).apply(action);
}

impl<R: TableView> ListTab for ListScreen<R> {
	fn search(&mut self, text: &str) {
		if self.state().search != text {
			dispatch(self, ListAction::Search(text.to_string()));
		}
	}

	fn page(&mut self, forward: bool) {
		dispatch(self, if forward { ListAction::Next } else { ListAction::Prev });
	}

	fn sort_column(&mut self, index: usize) -> Option<String> {
		let field = R::COLUMNS.iter().filter_map(|column| column.sort).nth(index)?;
		dispatch(self, ListAction::Sort(field));
		Some(match self.state().active_sort() {
			Some(spec) => format!("Sorted by {} {}", spec.field.label(), arrow(spec.direction)),
			None => format!("Sort on {} cleared", field.label()),
		})
	}

	fn cycle_filter(&mut self, secondary: bool) -> String {
		let filter = R::cycle_filter(self.state().filter.clone(), secondary);
		dispatch(self, ListAction::Filter(filter));
		R::describe_filter(&self.state().filter)
	}

	fn delete_row(&mut self, row: usize) -> Option<String> {
		if !R::DELETABLE {
			return None;
		}
		let id = self.view().records.get(row)?.id().to_string();
		dispatch(self, ListAction::Delete(id.clone()));
		Some(id)
	}

	fn reset(&mut self) {
		dispatch(self, ListAction::Reset);
	}

	fn row_count(&self) -> usize {
		self.view().records.len()
	}

	fn cards(&self) -> Vec<Card> {
		R::cards(&self.view(), self.state())
	}

	fn table(&self, theme: &Theme) -> TableSpec<'static> {
		let active = self.state().active_sort();
		let view = self.view();
		TableSpec {
			headers: R::COLUMNS
				.iter()
				.map(|column| header(column, active, theme))
				.collect(),
			widths: R::COLUMNS.iter().map(|column| column.width).collect(),
			rows: view
				.records
				.iter()
				.map(|record| Row::new(record.cells().into_iter().map(Cell::from)))
				.collect(),
			title: Some(format!(" {} · {} ", R::TITLE, R::describe_filter(&self.state().filter))),
			empty_message: NO_RESULTS,
		}
	}

	fn pager(&self) -> PagerState {
		let view = self.view();
		PagerState {
			markers: view.page_markers(),
			current: view.page,
			shown: view.records.len(),
			filtered: view.filtered_count,
			noun: R::NOUN,
		}
	}
}

fn header<F: Copy + PartialEq>(
	column: &Column<F>,
	active: Option<SortSpec<F>>,
	theme: &Theme,
) -> Line<'static> {
	let Some(field) = column.sort else {
		return Line::from(column.title);
	};
	match active.filter(|spec| spec.field == field) {
		Some(spec) => Line::from(Span::styled(
			format!("{} {}", column.title, arrow(spec.direction)),
			theme.highlight,
		)),
		None => Line::from(format!("{} {}", column.title, arrow(SortDirection::Unsorted))),
	}
}

fn arrow(direction: SortDirection) -> &'static str {
	match direction {
		SortDirection::Ascending => "↑",
		SortDirection::Descending => "↓",
		SortDirection::Unsorted => "↕",
	}
}
