use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use storefront_tui::{Tab, Theme, UiOptions};
use tracing::Level;

mod errors;
pub(super) mod keys;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) products_page_size: usize,
	pub(crate) admin_page_size: usize,
	pub(crate) debounce: Duration,
	pub(crate) theme_name: String,
	pub(crate) theme: Theme,
	pub(crate) start: Tab,
	pub(crate) log_level: Level,
	/// Log file for the interactive session; `None` uses the data directory.
	pub(crate) log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	/// Options handed to the interactive app.
	pub(crate) fn ui_options(&self) -> UiOptions {
		UiOptions {
			theme: self.theme,
			products_page_size: self.products_page_size,
			admin_page_size: self.admin_page_size,
			debounce: self.debounce,
			start: self.start,
		}
	}

	/// Print a human readable summary of the effective configuration to
	/// stderr, leaving stdout to the command's own output.
	pub(crate) fn print_summary(&self) -> io::Result<()> {
		self.write_summary(&mut io::stderr().lock())
	}

	pub(crate) fn write_summary(&self, out: &mut impl Write) -> io::Result<()> {
		for line in summary::summary_lines(self) {
			writeln!(out, "{line}")?;
		}
		Ok(())
	}
}
