//! Reusable widgets composed by the app's screens.

pub mod input;
pub mod pager;
pub mod summary;
pub mod tables;
pub mod tabs;

pub use input::SearchInput;
pub use pager::{PagerState, pager_line, render_pager};
pub use summary::{CARD_HEIGHT, Card, render_cards};
pub use tables::{TableSpec, render_table};
pub use tabs::render_tabs;
