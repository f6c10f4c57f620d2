//! Interactive terminal front-end for `storefront`.
//!
//! Each tab renders one list screen from `storefront-core`: the search input,
//! summary cards, the current page as a table and a pager strip. The cart tab
//! shows the order summary and accepts a promo code.

mod app;
pub mod components;
mod config;
mod runtime;
pub mod style;

pub use app::App;
pub use config::{Tab, UiOptions};
pub use runtime::run;
pub use style::{Theme, by_name, default_theme, names};
