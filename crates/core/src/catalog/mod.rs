//! Record types for each screen, with their closed value sets and filters.

mod customer;
mod order;
mod product;
mod screens;
pub mod seed;
mod transaction;

pub use customer::{Customer, CustomerField, CustomerFilter, Gender, Role};
pub use order::{Order, OrderField, OrderFilter, OrderStatus};
pub use product::{
	Category, PLACEHOLDER_IMAGE, Product, ProductField, ProductFilter, StockStatus, LOW_STOCK_THRESHOLD,
};
pub use screens::{customer_screen, order_screen, product_screen, transaction_screen};
pub use transaction::{Transaction, TransactionField, TransactionFilter, TransactionStatus};

/// Rows per page on the product search grid.
pub const PRODUCTS_PAGE_SIZE: usize = 8;
/// Rows per page on the admin tables.
pub const ADMIN_PAGE_SIZE: usize = 5;
