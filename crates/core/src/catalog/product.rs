use serde::Serialize;

use crate::listview::{
	Choice, FieldValue, Labelled, PriceRange, Record, RecordField, RecordFilter, labelled_enum,
};

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
/// Stock below this count is reported as low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

labelled_enum! {
	/// Product family, the Search screen's categorical filter.
	pub enum Category ("category") {
		Headphone => ("headphone", "Headphones"),
		Camera => ("camera", "Cameras"),
		SmartWatch => ("smartWatch", "Smart Watches"),
	}
}

labelled_enum! {
	pub enum StockStatus ("stock status") {
		InStock => ("inStock", "In stock"),
		LowStock => ("lowStock", "Low stock"),
		OutOfStock => ("outOfStock", "Out of stock"),
	}
}

labelled_enum! {
	pub enum ProductField ("product field") {
		Id => ("id", "ID"),
		Name => ("name", "Name"),
		Price => ("price", "Price"),
		Rating => ("rating", "Rating"),
		Reviews => ("reviews", "Reviews"),
		Category => ("category", "Category"),
		Stock => ("stock", "Stock"),
	}
}

impl RecordField for ProductField {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	pub id: String,
	pub name: String,
	pub image: String,
	pub price: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub original_price: Option<f64>,
	/// Percentage off `original_price`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discount: Option<u32>,
	pub rating: f64,
	pub reviews: u32,
	pub category: Category,
	pub is_new: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stock: Option<u32>,
}

impl Product {
	/// Stock level bucket. Products without a stock count are treated as
	/// available.
	pub fn stock_status(&self) -> StockStatus {
		match self.stock {
			Some(0) => StockStatus::OutOfStock,
			Some(count) if count < LOW_STOCK_THRESHOLD => StockStatus::LowStock,
			_ => StockStatus::InStock,
		}
	}

	pub fn image_or_placeholder(&self) -> &str {
		if self.image.trim().is_empty() {
			PLACEHOLDER_IMAGE
		} else {
			&self.image
		}
	}
}

impl Record for Product {
	type Field = ProductField;
	type Filter = ProductFilter;

	const SEARCH_FIELDS: &'static [ProductField] = &[ProductField::Name];
	const SUMMED_FIELDS: &'static [ProductField] = &[ProductField::Price];

	fn id(&self) -> &str {
		&self.id
	}

	fn field(&self, field: ProductField) -> FieldValue<'_> {
		match field {
			ProductField::Id => FieldValue::Text(&self.id),
			ProductField::Name => FieldValue::Text(&self.name),
			ProductField::Price => FieldValue::Number(self.price),
			ProductField::Rating => FieldValue::Number(self.rating),
			ProductField::Reviews => FieldValue::Number(f64::from(self.reviews)),
			ProductField::Category => FieldValue::Text(self.category.as_str()),
			ProductField::Stock => self
				.stock
				.map_or(FieldValue::Missing, |stock| FieldValue::Number(f64::from(stock))),
		}
	}
}

/// Category plus an optional inclusive price window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductFilter {
	pub category: Choice<Category>,
	pub price: Option<PriceRange>,
}

impl RecordFilter<Product> for ProductFilter {
	fn matches(&self, product: &Product) -> bool {
		self.category.accepts(&product.category)
			&& self.price.is_none_or(|range| range.contains(product.price))
	}
}
