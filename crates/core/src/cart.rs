//! Shopping cart: quantities, promo code and the order summary.

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::PLACEHOLDER_IMAGE;

/// The only promo code the cart accepts.
pub const PROMO_CODE: &str = "SAVE10";
/// Fraction of the subtotal taken off by [`PROMO_CODE`].
pub const PROMO_RATE: f64 = 0.10;
/// Tax charged on the discounted subtotal.
pub const TAX_RATE: f64 = 0.18;
/// Subtotals above this ship for free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
pub const SHIPPING_FEE: f64 = 9.99;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
	pub id: String,
	pub name: String,
	pub price: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub original_price: Option<f64>,
	pub image: String,
	pub quantity: u32,
	pub category: String,
	pub in_stock: bool,
}

impl CartItem {
	pub fn line_total(&self) -> f64 {
		self.price * f64::from(self.quantity)
	}

	pub fn image_or_placeholder(&self) -> &str {
		if self.image.trim().is_empty() {
			PLACEHOLDER_IMAGE
		} else {
			&self.image
		}
	}
}

/// Result of submitting a promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum PromoOutcome {
	Applied,
	/// The code is not recognised; the cart is unchanged.
	Rejected { code: String },
}

impl PromoOutcome {
	pub fn is_applied(&self) -> bool {
		matches!(self, Self::Applied)
	}
}

/// Money owed for the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartSummary {
	/// Number of units across all lines.
	pub units: u32,
	pub subtotal: f64,
	pub discount: f64,
	pub tax: f64,
	pub shipping: f64,
	pub total: f64,
}

/// Cart contents plus the applied promo code, replaced on every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
	items: Vec<CartItem>,
	#[serde(skip_serializing_if = "Option::is_none")]
	promo: Option<String>,
}

impl Cart {
	pub fn new(items: Vec<CartItem>) -> Self {
		Self { items, promo: None }
	}

	pub fn items(&self) -> &[CartItem] {
		&self.items
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Applied promo code, if any.
	pub fn promo(&self) -> Option<&str> {
		self.promo.as_deref()
	}

	pub fn find(&self, id: &str) -> Option<&CartItem> {
		self.items.iter().find(|item| item.id == id)
	}

	/// Set the quantity of line `id`. Quantities below 1 are ignored.
	#[must_use]
	pub fn update_quantity(self, id: &str, quantity: u32) -> Self {
		if quantity == 0 {
			return self;
		}
		let items = self
			.items
			.into_iter()
			.map(|item| {
				if item.id == id {
					CartItem { quantity, ..item }
				} else {
					item
				}
			})
			.collect();
		Self { items, ..self }
	}

	/// Add one unit to line `id`. Out-of-stock lines cannot grow.
	#[must_use]
	pub fn increment(self, id: &str) -> Self {
		let grown = self
			.find(id)
			.filter(|item| item.in_stock)
			.map(|item| item.quantity.saturating_add(1));
		match grown {
			Some(quantity) => self.update_quantity(id, quantity),
			None => self,
		}
	}

	/// Remove one unit from line `id`, stopping at 1.
	#[must_use]
	pub fn decrement(self, id: &str) -> Self {
		match self.find(id).map(|item| item.quantity) {
			Some(quantity) => self.update_quantity(id, quantity.saturating_sub(1)),
			None => self,
		}
	}

	#[must_use]
	pub fn remove(self, id: &str) -> Self {
		let items = self.items.into_iter().filter(|item| item.id != id).collect();
		Self { items, ..self }
	}

	/// Apply `code` if it names the supported promotion, ignoring case and
	/// surrounding whitespace.
	pub fn apply_promo(self, code: &str) -> (Self, PromoOutcome) {
		if code.trim().eq_ignore_ascii_case(PROMO_CODE) {
			info!(code = PROMO_CODE, "promo code applied");
			let cart = Self {
				promo: Some(PROMO_CODE.to_string()),
				..self
			};
			return (cart, PromoOutcome::Applied);
		}

		warn!(code, "promo code rejected");
		let outcome = PromoOutcome::Rejected {
			code: code.to_string(),
		};
		(self, outcome)
	}

	/// Withdraw the applied promo code, if any.
	#[must_use]
	pub fn clear_promo(self) -> Self {
		if let Some(code) = &self.promo {
			info!(code, "promo code removed");
		}
		Self { promo: None, ..self }
	}

	pub fn summary(&self) -> CartSummary {
		let units = self.items.iter().map(|item| item.quantity).sum();
		let subtotal: f64 = self.items.iter().map(CartItem::line_total).sum();
		let discount = if self.promo.is_some() {
			subtotal * PROMO_RATE
		} else {
			0.0
		};
		let tax = (subtotal - discount) * TAX_RATE;
		let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
			0.0
		} else {
			SHIPPING_FEE
		};

		CartSummary {
			units,
			subtotal,
			discount,
			tax,
			shipping,
			total: subtotal - discount + tax + shipping,
		}
	}
}
