use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use storefront_core::app_dirs;

use crate::cli::CliArgs;

/// Prefix of the environment variables read as configuration, for example
/// `STOREFRONT__PAGINATION__ADMIN_PAGE_SIZE=10`.
pub(super) const ENV_PREFIX: &str = "storefront";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] from the default locations, `--config` files and the
/// environment, in increasing order of precedence.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Config files consulted unless `--no-config` is given.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(path) = app_dirs::default_config_file() {
		files.push(path);
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".storefront.toml"));
		files.push(current_dir.join("storefront.toml"));
	}

	files
}
