use serde::Serialize;

use crate::listview::{Choice, FieldValue, Labelled, Record, RecordField, RecordFilter, labelled_enum};

labelled_enum! {
	pub enum OrderStatus ("order status") {
		Pending => ("pending", "Pending"),
		Processing => ("processing", "Processing"),
		Completed => ("completed", "Completed"),
		Cancelled => ("cancelled", "Cancelled"),
	}
}

labelled_enum! {
	pub enum OrderField ("order field") {
		Id => ("id", "Order ID"),
		Customer => ("customer", "Customer"),
		Quantity => ("quantity", "Qty"),
		Discount => ("discount", "Discount"),
		Amount => ("amount", "Amount"),
		Status => ("status", "Status"),
		Date => ("date", "Date"),
	}
}

impl RecordField for OrderField {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
	pub id: String,
	pub quantity: u32,
	pub discount: f64,
	pub amount: f64,
	pub status: OrderStatus,
	/// ISO date, so text order is chronological.
	pub date: String,
	pub customer: String,
}

impl Record for Order {
	type Field = OrderField;
	type Filter = OrderFilter;

	const SEARCH_FIELDS: &'static [OrderField] = &[OrderField::Id, OrderField::Customer];
	const SUMMED_FIELDS: &'static [OrderField] =
		&[OrderField::Amount, OrderField::Discount, OrderField::Quantity];

	fn id(&self) -> &str {
		&self.id
	}

	fn field(&self, field: OrderField) -> FieldValue<'_> {
		match field {
			OrderField::Id => FieldValue::Text(&self.id),
			OrderField::Customer => FieldValue::Text(&self.customer),
			OrderField::Quantity => FieldValue::Number(f64::from(self.quantity)),
			OrderField::Discount => FieldValue::Number(self.discount),
			OrderField::Amount => FieldValue::Number(self.amount),
			OrderField::Status => FieldValue::Text(self.status.as_str()),
			OrderField::Date => FieldValue::Text(&self.date),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
	pub status: Choice<OrderStatus>,
}

impl RecordFilter<Order> for OrderFilter {
	fn matches(&self, order: &Order) -> bool {
		self.status.accepts(&order.status)
	}
}
