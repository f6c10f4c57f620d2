//! Dotted configuration keys, as written in the TOML file.

pub(crate) const PRODUCTS_PAGE_SIZE: &str = "pagination.products_page_size";
pub(crate) const ADMIN_PAGE_SIZE: &str = "pagination.admin_page_size";
pub(crate) const DEBOUNCE_MS: &str = "search.debounce_ms";
pub(crate) const THEME: &str = "ui.theme";
pub(crate) const START_SCREEN: &str = "ui.start_screen";
pub(crate) const LOG_LEVEL: &str = "logging.level";
