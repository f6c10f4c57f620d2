use std::fmt::Write;

use anyhow::Result;
use serde_json::{Map, Value, json};
use storefront_core::format::{format_currency, format_whole};
use storefront_core::{
	Cart, Customer, Labelled, Order, OrderField, PageView, Product, PromoOutcome, Record,
	Transaction, TransactionField, ViewState,
};

use super::OutputFormat;

/// Columns a record type prints as in plain output.
pub(crate) trait PlainRow: Record {
	/// Screen name used as the `screen` key in JSON output.
	const SCREEN: &'static str;
	const HEADERS: &'static [&'static str];
	/// Summed fields shown as whole numbers rather than money.
	const WHOLE_TOTALS: &'static [Self::Field] = &[];

	fn cells(&self) -> Vec<String>;
}

impl PlainRow for Product {
	const SCREEN: &'static str = "products";
	const HEADERS: &'static [&'static str] =
		&["ID", "Name", "Category", "Price", "Rating", "Reviews", "Stock"];

	fn cells(&self) -> Vec<String> {
		vec![
			self.id.clone(),
			self.name.clone(),
			self.category.label().to_string(),
			format_currency(self.price),
			format!("{:.1}", self.rating),
			self.reviews.to_string(),
			self.stock_status().label().to_string(),
		]
	}
}

impl PlainRow for Order {
	const SCREEN: &'static str = "orders";
	const HEADERS: &'static [&'static str] =
		&["Order ID", "Customer", "Qty", "Discount", "Amount", "Status", "Date"];
	const WHOLE_TOTALS: &'static [OrderField] = &[OrderField::Quantity];

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
}

impl PlainRow for Customer {
	const SCREEN: &'static str = "customers";
	const HEADERS: &'static [&'static str] = &["ID", "Name", "Email", "Gender", "Role"];

	fn cells(&self) -> Vec<String> {
		vec![
			self.id.clone(),
			self.name.clone(),
			self.email.clone(),
			self.gender.label().to_string(),
			self.role.label().to_string(),
		]
	}
}

impl PlainRow for Transaction {
	const SCREEN: &'static str = "transactions";
	const HEADERS: &'static [&'static str] =
		&["Transaction", "User", "Amount", "Discount", "Qty", "Status", "Date"];
	const WHOLE_TOTALS: &'static [TransactionField] = &[TransactionField::Quantity];

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
}

/// Print one page of a list screen in the chosen format.
pub(crate) fn print_page<R: PlainRow>(
	format: OutputFormat,
	view: &PageView<'_, R>,
	state: &ViewState<R>,
) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_page_plain(view)),
		OutputFormat::Json => println!("{}", format_page_json(view, state)?),
	}
	Ok(())
}

pub(crate) fn format_page_plain<R: PlainRow>(view: &PageView<'_, R>) -> String {
	let mut out = String::new();
	if view.is_empty() {
		let _ = writeln!(out, "No results");
	} else {
		let rows: Vec<Vec<String>> = view.records.iter().map(|record| record.cells()).collect();
		out.push_str(&columns(R::HEADERS, &rows));
	}

	let _ = writeln!(
		out,
		"Page {} of {} · showing {} of {} {}",
		view.page,
		view.total_pages,
		view.records.len(),
		view.filtered_count,
		R::SCREEN
	);
	for (field, sum) in view.totals.iter() {
		let value = if R::WHOLE_TOTALS.contains(&field) {
			format_whole(sum)
		} else {
			format_currency(sum)
		};
		let _ = writeln!(out, "Total {}: {value}", field.label().to_lowercase());
	}
	out
}

/// Format a page, its totals and the criteria that produced it as JSON.
pub(crate) fn format_page_json<R: PlainRow>(
	view: &PageView<'_, R>,
	state: &ViewState<R>,
) -> Result<String> {
	let totals: Map<String, Value> = view
		.totals
		.iter()
		.map(|(field, sum)| (field.as_str().to_string(), Value::from(sum)))
		.collect();

	let payload = json!({
		"screen": R::SCREEN,
		"search": state.search,
		"sort": state.active_sort().map(|sort| sort.to_string()),
		"page": view.page,
		"total_pages": view.total_pages,
		"page_size": view.page_size,
		"filtered_count": view.filtered_count,
		"totals": totals,
		"records": serde_json::to_value(&view.records)?,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the cart, its summary and the outcome of any promo code.
pub(crate) fn print_cart(
	format: OutputFormat,
	cart: &Cart,
	outcome: Option<&PromoOutcome>,
) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_cart_plain(cart, outcome)),
		OutputFormat::Json => println!("{}", format_cart_json(cart, outcome)?),
	}
	Ok(())
}

pub(crate) fn format_cart_plain(cart: &Cart, outcome: Option<&PromoOutcome>) -> String {
	let mut out = String::new();
	match outcome {
		Some(PromoOutcome::Applied) => {
			let _ = writeln!(out, "Promo code {} applied", cart.promo().unwrap_or_default());
		}
		Some(PromoOutcome::Rejected { code }) => {
			let _ = writeln!(out, "Promo code `{code}` is not valid");
		}
		None => {}
	}

	if cart.is_empty() {
		let _ = writeln!(out, "Your cart is empty");
		return out;
	}

	let rows: Vec<Vec<String>> = cart
		.items()
		.iter()
		.map(|item| {
			vec![
				item.id.clone(),
				item.name.clone(),
				item.category.clone(),
				format_currency(item.price),
				item.quantity.to_string(),
				format_currency(item.line_total()),
				if item.in_stock { String::new() } else { "Out of stock".to_string() },
			]
		})
		.collect();
	out.push_str(&columns(&["ID", "Item", "Category", "Price", "Qty", "Total", ""], &rows));

	let summary = cart.summary();
	let discount = match cart.promo() {
		Some(code) => format!("-{} ({code})", format_currency(summary.discount)),
		None => format_currency(0.0),
	};
	let shipping = if summary.shipping > 0.0 {
		format_currency(summary.shipping)
	} else {
		"Free".to_string()
	};
	let lines = [
		vec!["Items".to_string(), summary.units.to_string()],
		vec!["Subtotal".to_string(), format_currency(summary.subtotal)],
		vec!["Discount".to_string(), discount],
		vec!["Tax (18%)".to_string(), format_currency(summary.tax)],
		vec!["Shipping".to_string(), shipping],
		vec!["Total".to_string(), format_currency(summary.total)],
	];
	out.push('\n');
	out.push_str(&columns(&[], &lines));
	out
}

pub(crate) fn format_cart_json(cart: &Cart, outcome: Option<&PromoOutcome>) -> Result<String> {
	let payload = json!({
		"items": serde_json::to_value(cart.items())?,
		"promo": cart.promo(),
		"promo_outcome": serde_json::to_value(outcome)?,
		"summary": serde_json::to_value(cart.summary())?,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Left-aligned columns separated by two spaces. An empty `headers` prints
/// only the rows.
fn columns(headers: &[&str], rows: &[Vec<String>]) -> String {
	let count = rows.iter().map(Vec::len).chain([headers.len()]).max().unwrap_or(0);
	let mut widths = vec![0; count];
	for (index, header) in headers.iter().enumerate() {
		widths[index] = header.chars().count();
	}
	for row in rows {
		for (index, cell) in row.iter().enumerate() {
			widths[index] = widths[index].max(cell.chars().count());
		}
	}

	let mut out = String::new();
	let mut push_line = |cells: &mut dyn Iterator<Item = &str>| {
		let mut line = String::new();
		for (index, cell) in cells.enumerate() {
			if index > 0 {
				line.push_str("  ");
			}
			let _ = write!(line, "{cell:<width$}", width = widths[index]);
		}
		let _ = writeln!(out, "{}", line.trim_end());
	};

	if !headers.is_empty() {
		push_line(&mut headers.iter().copied());
	}
	for row in rows {
		push_line(&mut row.iter().map(String::as_str));
	}
	out
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use storefront_core::catalog::seed;
	use storefront_core::{ListAction, ListScreen, order_screen};

	use super::*;

	fn orders() -> ListScreen<Order> {
		order_screen(seed::orders(), 5)
	}

	#[test]
	fn plain_page_lists_rows_and_totals() {
		let screen = orders().apply(ListAction::Search("jane".into()));
		let text = format_page_plain(&screen.view());

		let mut lines = text.lines();
		assert!(lines.next().is_some_and(|header| header.starts_with("Order ID  Customer")));
		assert!(text.contains("ORD-002   Jane Smith"));
		assert!(text.contains("Page 1 of 1 · showing 1 of 1 orders"));
		assert!(text.contains("Total amount: $6,999.00"));
		assert!(text.contains("Total qty: 6"));
	}

	#[test]
	fn plain_page_reports_no_results() {
		let screen = orders().apply(ListAction::Search("nobody".into()));
		let text = format_page_plain(&screen.view());
		assert!(text.starts_with("No results\n"));
		assert!(text.contains("showing 0 of 0 orders"));
	}

	#[test]
	fn json_page_carries_criteria_and_records() {
		let screen = orders().apply(ListAction::GoTo(3));
		let json = format_page_json(&screen.view(), screen.state()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		assert_eq!(value["screen"], "orders");
		assert_eq!(value["page"], 3);
		assert_eq!(value["total_pages"], 3);
		assert_eq!(value["filtered_count"], 12);
		assert_eq!(value["records"][0]["id"], "ORD-011");
		assert_eq!(value["records"].as_array().map(Vec::len), Some(2));
		assert_eq!(value["sort"], Value::Null);
	}

	#[test]
	fn cart_plain_includes_summary_and_promo() {
		let (cart, outcome) = Cart::new(seed::cart_items()).apply_promo("save10");
		let text = format_cart_plain(&cart, Some(&outcome));

		assert!(text.starts_with("Promo code SAVE10 applied\n"));
		assert!(text.contains("Out of stock"));
		assert!(text.contains("-$48.50 (SAVE10)"));
		assert!(text.contains("Shipping   Free"));
	}

	#[test]
	fn rejected_promo_is_reported_in_json() {
		let (cart, outcome) = Cart::new(seed::cart_items()).apply_promo("BOGUS");
		let json = format_cart_json(&cart, Some(&outcome)).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		assert_eq!(value["promo_outcome"]["outcome"], "rejected");
		assert_eq!(value["promo_outcome"]["code"], "BOGUS");
		assert_eq!(value["promo"], Value::Null);
		assert_eq!(value["items"].as_array().map(Vec::len), Some(3));
	}

	#[test]
	fn empty_cart_has_a_message() {
		let text = format_cart_plain(&Cart::default(), None);
		assert_eq!(text, "Your cart is empty\n");
	}
}
