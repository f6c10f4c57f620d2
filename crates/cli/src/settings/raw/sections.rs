use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{CliArgs, Command};

/// `[pagination]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PaginationSection {
	pub(super) products_page_size: Option<usize>,
	pub(super) admin_page_size: Option<usize>,
}

impl PaginationSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(size) = cli.products_page_size {
			self.products_page_size = Some(size);
		}
		if let Some(size) = cli.admin_page_size {
			self.admin_page_size = Some(size);
		}
	}
}

/// `[search]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(ms) = cli.debounce_ms {
			self.debounce_ms = Some(ms);
		}
	}
}

/// `[ui]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) start_screen: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = &cli.theme {
			self.theme = Some(theme.clone());
		}
		if let Some(screen) = browse_screen(cli) {
			self.start_screen = Some(screen.to_string());
		}
	}
}

/// `[logging]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = &cli.log_level {
			self.level = Some(level.clone());
		}
		if let Some(file) = &cli.log_file {
			self.file = Some(file.clone());
		}
	}
}

/// `--screen` only exists on `browse`.
pub(super) fn browse_screen(cli: &CliArgs) -> Option<&'static str> {
	match &cli.command {
		Some(Command::Browse(args)) => args.screen.map(|screen| screen.as_str()),
		_ => None,
	}
}
