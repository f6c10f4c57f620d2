use std::time::Duration;

use storefront_core::catalog::{ADMIN_PAGE_SIZE, PRODUCTS_PAGE_SIZE};
use storefront_core::debounce::DEFAULT_DELAY;

use crate::style::Theme;

/// One screen of the interactive app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
	#[default]
	Products,
	Orders,
	Customers,
	Transactions,
	Cart,
}

impl Tab {
	pub const ALL: [Self; 5] = [
		Self::Products,
		Self::Orders,
		Self::Customers,
		Self::Transactions,
		Self::Cart,
	];

	/// Label rendered on the tab selector.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Products => "Products",
			Self::Orders => "Orders",
			Self::Customers => "Customers",
			Self::Transactions => "Transactions",
			Self::Cart => "Cart",
		}
	}

	/// Placeholder shown in the input while it is empty.
	#[must_use]
	pub fn placeholder(self) -> &'static str {
		match self {
			Self::Products => "Search products by name...",
			Self::Orders => "Search by order ID or customer...",
			Self::Customers => "Search by name or email...",
			Self::Transactions => "Search by user name or transaction ID...",
			Self::Cart => "Promo code (Ctrl+P to apply)",
		}
	}

	#[must_use]
	pub fn index(self) -> usize {
		Self::ALL.iter().position(|tab| *tab == self).unwrap_or_default()
	}

	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	/// Resolve a tab from its label, ignoring case.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim();
		Self::ALL
			.into_iter()
			.find(|tab| tab.label().eq_ignore_ascii_case(name))
	}
}

/// Everything the interactive app takes from configuration.
#[derive(Debug, Clone)]
pub struct UiOptions {
	pub theme: Theme,
	pub products_page_size: usize,
	pub admin_page_size: usize,
	/// Quiet period before product search text is applied.
	pub debounce: Duration,
	pub start: Tab,
}

impl Default for UiOptions {
	fn default() -> Self {
		Self {
			theme: Theme::default(),
			products_page_size: PRODUCTS_PAGE_SIZE,
			admin_page_size: ADMIN_PAGE_SIZE,
			debounce: DEFAULT_DELAY,
			start: Tab::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tabs_wrap_in_both_directions() {
		assert_eq!(Tab::Cart.next(), Tab::Products);
		assert_eq!(Tab::Products.previous(), Tab::Cart);
		assert_eq!(Tab::Orders.next(), Tab::Customers);
	}

	#[test]
	fn tabs_resolve_from_labels() {
		assert_eq!(Tab::from_name("transactions"), Some(Tab::Transactions));
		assert_eq!(Tab::from_name(" CART "), Some(Tab::Cart));
		assert_eq!(Tab::from_name("dashboard"), None);
	}
}
