use std::env;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use storefront_core::debounce::DEFAULT_DELAY;
use storefront_core::{ADMIN_PAGE_SIZE, PRODUCTS_PAGE_SIZE};

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, keys, validation};
use super::sources::{ENV_PREFIX, ENV_SEPARATOR};

mod sections;

use sections::{LoggingSection, PaginationSection, SearchSection, UiSection, browse_screen};

const DEFAULT_THEME: &str = "slate";
const DEFAULT_START_SCREEN: &str = "products";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pagination: PaginationSection,
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.pagination.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources: ConfigSources = [
			(
				keys::PRODUCTS_PAGE_SIZE,
				detect_source(
					cli.products_page_size.is_some(),
					self.pagination.products_page_size.is_some(),
					"--products-page-size",
					keys::PRODUCTS_PAGE_SIZE,
				),
			),
			(
				keys::ADMIN_PAGE_SIZE,
				detect_source(
					cli.admin_page_size.is_some(),
					self.pagination.admin_page_size.is_some(),
					"--admin-page-size",
					keys::ADMIN_PAGE_SIZE,
				),
			),
			(
				keys::DEBOUNCE_MS,
				detect_source(
					cli.debounce_ms.is_some(),
					self.search.debounce_ms.is_some(),
					"--debounce-ms",
					keys::DEBOUNCE_MS,
				),
			),
			(
				keys::THEME,
				detect_source(cli.theme.is_some(), self.ui.theme.is_some(), "--theme", keys::THEME),
			),
			(
				keys::START_SCREEN,
				detect_source(
					browse_screen(cli).is_some(),
					self.ui.start_screen.is_some(),
					"--screen",
					keys::START_SCREEN,
				),
			),
			(
				keys::LOG_LEVEL,
				detect_source(
					cli.log_level.is_some(),
					self.logging.level.is_some(),
					"--log-level",
					keys::LOG_LEVEL,
				),
			),
		]
		.into_iter()
		.collect();

		let products_page_size = self
			.pagination
			.products_page_size
			.unwrap_or(PRODUCTS_PAGE_SIZE);
		let admin_page_size = self.pagination.admin_page_size.unwrap_or(ADMIN_PAGE_SIZE);
		let debounce = self
			.search
			.debounce_ms
			.map_or(DEFAULT_DELAY, Duration::from_millis);
		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let start_screen = self
			.ui
			.start_screen
			.unwrap_or_else(|| DEFAULT_START_SCREEN.to_string());
		let log_level = self.logging.level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

		let config = ResolvedConfig {
			products_page_size: validation::page_size(
				keys::PRODUCTS_PAGE_SIZE,
				products_page_size,
				&sources,
			)?,
			admin_page_size: validation::page_size(keys::ADMIN_PAGE_SIZE, admin_page_size, &sources)?,
			debounce: validation::debounce(debounce, &sources)?,
			theme: validation::theme(&theme_name, &sources)?,
			theme_name,
			start: validation::start_screen(&start_screen, &sources)?,
			log_level: validation::log_level(&log_level, &sources)?,
			log_file: self.logging.file,
		};

		Ok(config)
	}
}

/// Where a value came from, checked in precedence order. `None` when the
/// setting was never given and its default applies.
fn detect_source(
	cli_present: bool,
	value_present: bool,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

/// `pagination.admin_page_size` -> `STOREFRONT__PAGINATION__ADMIN_PAGE_SIZE`
fn env_var_for(key: &str) -> String {
	let path = key.replace('.', ENV_SEPARATOR);
	format!("{ENV_PREFIX}{ENV_SEPARATOR}{path}").to_ascii_uppercase()
}

#[cfg(test)]
mod tests;
