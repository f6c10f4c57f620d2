use storefront_core::app_dirs;

use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let log_file = match &config.log_file {
		Some(path) => path.display().to_string(),
		None => app_dirs::default_log_file().map_or_else(
			|err| format!("(unavailable: {err})"),
			|path| format!("{} (default)", path.display()),
		),
	};

	vec![
		"Effective configuration:".to_string(),
		format!("  Products per page: {}", config.products_page_size),
		format!("  Admin rows per page: {}", config.admin_page_size),
		format!("  Search debounce: {} ms", config.debounce.as_millis()),
		format!("  UI theme: {}", config.theme_name),
		format!("  Start screen: {}", config.start.label()),
		format!("  Log level: {}", config.log_level),
		format!("  Log file: {log_file}"),
	]
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use storefront_tui::{Tab, default_theme};
	use tracing::Level;

	use super::*;

	fn sample() -> ResolvedConfig {
		ResolvedConfig {
			products_page_size: 8,
			admin_page_size: 10,
			debounce: Duration::from_millis(250),
			theme_name: "light".into(),
			theme: default_theme(),
			start: Tab::Transactions,
			log_level: Level::WARN,
			log_file: Some(PathBuf::from("/tmp/storefront.log")),
		}
	}

	#[test]
	fn summary_lists_every_setting() {
		let lines = summary_lines(&sample());
		assert_eq!(lines[0], "Effective configuration:");
		assert!(lines.contains(&"  Admin rows per page: 10".to_string()));
		assert!(lines.contains(&"  Search debounce: 250 ms".to_string()));
		assert!(lines.contains(&"  Start screen: Transactions".to_string()));
		assert!(lines.contains(&"  Log level: WARN".to_string()));
		assert!(lines.contains(&"  Log file: /tmp/storefront.log".to_string()));
	}

	#[test]
	fn summary_goes_only_to_the_given_writer() {
		let mut out = Vec::new();
		sample().write_summary(&mut out).expect("write to a vec");

		let text = String::from_utf8(out).expect("utf-8");
		assert!(text.starts_with("Effective configuration:\n"));
		assert!(text.ends_with("  Log file: /tmp/storefront.log\n"));
		assert_eq!(text.lines().count(), summary_lines(&sample()).len());
	}
}
