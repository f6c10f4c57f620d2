use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use storefront_tui::Tab;
use tempfile::tempdir;
use tracing::Level;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::load;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"storefront",
		"--products-page-size",
		"12",
		"--admin-page-size",
		"7",
		"--debounce-ms",
		"150",
		"--theme",
		"light",
		"--log-level",
		"debug",
		"--log-file",
		"/tmp/sf.log",
		"browse",
		"--screen",
		"customers",
	]);

	let mut config = RawConfig::default();
	config.ui.theme = Some("slate".into());
	config.pagination.admin_page_size = Some(3);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.pagination.products_page_size, Some(12));
	assert_eq!(config.pagination.admin_page_size, Some(7));
	assert_eq!(config.search.debounce_ms, Some(150));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.start_screen.as_deref(), Some("customers"));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
	assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/sf.log")));
}

#[test]
fn defaults_apply_without_any_source() {
	let cli = CliArgs::parse_from(["storefront", "orders"]);
	let config = RawConfig::default().resolve(&cli).expect("defaults are valid");

	assert_eq!(config.products_page_size, 8);
	assert_eq!(config.admin_page_size, 5);
	assert_eq!(config.debounce, Duration::from_millis(300));
	assert_eq!(config.theme_name, "slate");
	assert_eq!(config.start, Tab::Products);
	assert_eq!(config.log_level, Level::INFO);
	assert_eq!(config.log_file, None);
}

#[test]
fn config_file_values_load_and_flags_win() {
	let dir = tempdir().expect("temp dir");
	let path = dir.path().join("storefront.toml");
	fs::write(
		&path,
		"[pagination]\nadmin_page_size = 10\nproducts_page_size = 4\n\n[ui]\ntheme = \"light\"\nstart_screen = \"cart\"\n",
	)
	.expect("write config");

	let cli = CliArgs::parse_from([
		"storefront",
		"--no-config",
		"--config",
		path.to_str().expect("utf-8 path"),
		"--products-page-size",
		"6",
	]);
	let config = load(&cli).expect("loads");

	assert_eq!(config.admin_page_size, 10);
	assert_eq!(config.products_page_size, 6);
	assert_eq!(config.theme_name, "light");
	assert_eq!(config.start, Tab::Cart);
}

#[test]
fn invalid_file_value_names_the_configuration_key() {
	let dir = tempdir().expect("temp dir");
	let path = dir.path().join("storefront.toml");
	fs::write(&path, "[pagination]\nadmin_page_size = 0\n").expect("write config");

	let cli = CliArgs::parse_from([
		"storefront",
		"--no-config",
		"--config",
		path.to_str().expect("utf-8 path"),
	]);
	let err = load(&cli).expect_err("zero rows per page is invalid");
	let message = err.to_string();

	assert!(message.contains("configuration key `pagination.admin_page_size`"));
	assert!(message.contains("value: 0"));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
	let dir = tempdir().expect("temp dir");
	let path = dir.path().join("absent.toml");
	let cli = CliArgs::parse_from([
		"storefront",
		"--no-config",
		"--config",
		path.to_str().expect("utf-8 path"),
	]);
	assert!(load(&cli).is_err());
}

#[test]
fn env_var_names_follow_the_key_path() {
	assert_eq!(
		super::env_var_for("pagination.admin_page_size"),
		"STOREFRONT__PAGINATION__ADMIN_PAGE_SIZE"
	);
}
