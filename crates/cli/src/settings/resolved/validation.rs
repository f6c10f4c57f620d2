use std::time::Duration;

use storefront_tui::{Tab, Theme};
use tracing::Level;

use super::{ConfigError, ConfigSources, keys};

const MAX_PAGE_SIZE: usize = 100;
const MAX_DEBOUNCE: Duration = Duration::from_secs(5);

pub(crate) fn page_size(
	key: &'static str,
	size: usize,
	sources: &ConfigSources,
) -> Result<usize, ConfigError> {
	if size == 0 || size > MAX_PAGE_SIZE {
		return Err(ConfigError::invalid(
			key,
			size.to_string(),
			sources.source_for(key),
			format!("must be between 1 and {MAX_PAGE_SIZE}"),
		));
	}
	Ok(size)
}

pub(crate) fn debounce(delay: Duration, sources: &ConfigSources) -> Result<Duration, ConfigError> {
	if delay > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			keys::DEBOUNCE_MS,
			delay.as_millis().to_string(),
			sources.source_for(keys::DEBOUNCE_MS),
			format!("must be at most {} ms", MAX_DEBOUNCE.as_millis()),
		));
	}
	Ok(delay)
}

pub(crate) fn theme(name: &str, sources: &ConfigSources) -> Result<Theme, ConfigError> {
	storefront_tui::by_name(name).ok_or_else(|| {
		ConfigError::invalid(
			keys::THEME,
			name,
			sources.source_for(keys::THEME),
			format!("expected one of {}", storefront_tui::names().join(", ")),
		)
	})
}

pub(crate) fn start_screen(name: &str, sources: &ConfigSources) -> Result<Tab, ConfigError> {
	Tab::from_name(name).ok_or_else(|| {
		let screens: Vec<_> = Tab::ALL.iter().map(|tab| tab.label().to_lowercase()).collect();
		ConfigError::invalid(
			keys::START_SCREEN,
			name,
			sources.source_for(keys::START_SCREEN),
			format!("expected one of {}", screens.join(", ")),
		)
	})
}

pub(crate) fn log_level(name: &str, sources: &ConfigSources) -> Result<Level, ConfigError> {
	name.trim().parse().map_err(|_| {
		ConfigError::invalid(
			keys::LOG_LEVEL,
			name,
			sources.source_for(keys::LOG_LEVEL),
			"expected trace, debug, info, warn or error",
		)
	})
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	fn from(key: &'static str, source: SettingSource) -> ConfigSources {
		[(key, Some(source))].into_iter().collect()
	}

	#[test]
	fn zero_page_size_names_the_cli_flag() {
		let sources = from(keys::ADMIN_PAGE_SIZE, SettingSource::CliFlag("--admin-page-size"));
		let err = page_size(keys::ADMIN_PAGE_SIZE, 0, &sources).unwrap_err();

		assert_eq!(err.key, keys::ADMIN_PAGE_SIZE);
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag `--admin-page-size`"));
	}

	#[test]
	fn oversized_page_is_rejected() {
		let err = page_size(keys::PRODUCTS_PAGE_SIZE, 101, &ConfigSources::default()).unwrap_err();
		assert!(err.to_string().contains("configuration key `pagination.products_page_size`"));
		assert_eq!(page_size(keys::PRODUCTS_PAGE_SIZE, 100, &ConfigSources::default()).ok(), Some(100));
	}

	#[test]
	fn long_debounce_names_the_environment_variable() {
		let sources = from(
			keys::DEBOUNCE_MS,
			SettingSource::Environment("STOREFRONT__SEARCH__DEBOUNCE_MS".into()),
		);
		let err = debounce(Duration::from_millis(5001), &sources).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("environment variable `STOREFRONT__SEARCH__DEBOUNCE_MS`"));
		assert!(message.contains("value: 5001"));

		assert!(debounce(Duration::ZERO, &sources).is_ok());
	}

	#[test]
	fn unknown_theme_lists_the_builtins() {
		let err = theme("neon", &ConfigSources::default()).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("neon"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn start_screen_and_level_parse_loosely() {
		let sources = ConfigSources::default();
		assert_eq!(start_screen("Orders", &sources).ok(), Some(Tab::Orders));
		assert!(start_screen("dashboard", &sources).is_err());
		assert_eq!(log_level("DEBUG", &sources).ok(), Some(Level::DEBUG));
		assert!(log_level("loud", &sources).is_err());
	}
}
