//! Core crate for the `storefront` screens.
//!
//! Every list screen (product search, orders, customers, transactions) is a
//! typed record collection pushed through the same filter, sort, paginate and
//! aggregate pipeline. The root module re-exports the pieces embedders need so
//! the terminal front-end and the CLI never reach into the module hierarchy.

pub mod app_dirs;
pub mod cart;
pub mod catalog;
pub mod debounce;
mod error;
pub mod format;
pub mod listview;

pub use cart::{Cart, CartItem, CartSummary, PromoOutcome};
pub use catalog::{
	ADMIN_PAGE_SIZE, Category, Customer, CustomerField, CustomerFilter, Gender, Order, OrderField,
	OrderFilter, OrderStatus, PRODUCTS_PAGE_SIZE, Product, ProductField, ProductFilter, Role,
	StockStatus, Transaction, TransactionField, TransactionFilter, TransactionStatus,
	customer_screen, order_screen, product_screen, seed, transaction_screen,
};
pub use debounce::{DebounceHandle, Debouncer, spawn_debouncer};
pub use error::ParseError;
pub use listview::{
	Choice, FieldValue, Labelled, ListAction, ListScreen, PageMarker, PageView, PriceRange, Record,
	RecordField, RecordFilter, SortDirection, SortPolicy, SortSpec, Totals, ViewState,
};
