use serde::Serialize;

use crate::listview::{Choice, FieldValue, Labelled, Record, RecordField, RecordFilter, labelled_enum};

labelled_enum! {
	pub enum TransactionStatus ("transaction status") {
		Processing => ("processing", "Processing"),
		Shipped => ("shipped", "Shipped"),
		Delivered => ("delivered", "Delivered"),
		Cancelled => ("cancelled", "Cancelled"),
	}
}

labelled_enum! {
	pub enum TransactionField ("transaction field") {
		Id => ("id", "Transaction"),
		User => ("user", "User"),
		Amount => ("amount", "Amount"),
		Discount => ("discount", "Discount"),
		Quantity => ("quantity", "Qty"),
		Status => ("status", "Status"),
		Date => ("date", "Date"),
	}
}

impl RecordField for TransactionField {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
	pub id: String,
	pub user: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	pub amount: f64,
	pub discount: f64,
	pub quantity: u32,
	pub status: TransactionStatus,
	pub date: String,
}

impl Record for Transaction {
	type Field = TransactionField;
	type Filter = TransactionFilter;

	const SEARCH_FIELDS: &'static [TransactionField] = &[TransactionField::User, TransactionField::Id];
	const SUMMED_FIELDS: &'static [TransactionField] = &[
		TransactionField::Amount,
		TransactionField::Discount,
		TransactionField::Quantity,
	];

	fn id(&self) -> &str {
		&self.id
	}

	fn field(&self, field: TransactionField) -> FieldValue<'_> {
		match field {
			TransactionField::Id => FieldValue::Text(&self.id),
			TransactionField::User => FieldValue::Text(&self.user),
			TransactionField::Amount => FieldValue::Number(self.amount),
			TransactionField::Discount => FieldValue::Number(self.discount),
			TransactionField::Quantity => FieldValue::Number(f64::from(self.quantity)),
			TransactionField::Status => FieldValue::Text(self.status.as_str()),
			TransactionField::Date => FieldValue::Text(&self.date),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
	pub status: Choice<TransactionStatus>,
}

impl RecordFilter<Transaction> for TransactionFilter {
	fn matches(&self, transaction: &Transaction) -> bool {
		self.status.accepts(&transaction.status)
	}
}
