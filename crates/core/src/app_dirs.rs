//! Where `storefront` looks for its config file and writes its log.
//!
//! `STOREFRONT_CONFIG_DIR` and `STOREFRONT_DATA_DIR` take precedence over the
//! platform locations from the `directories` crate.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "rs";
const ORGANIZATION: &str = "storefront";
const APPLICATION: &str = "storefront";

pub const CONFIG_DIR_ENV: &str = "STOREFRONT_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "STOREFRONT_DATA_DIR";

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "storefront.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("no home directory to derive storefront directories from"))
}

/// Unset and empty overrides both fall through to the platform default.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = override_dir(env::var_os(CONFIG_DIR_ENV)) {
		return Ok(dir);
	}
	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for the interactive session's log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = override_dir(env::var_os(DATA_DIR_ENV)) {
		return Ok(dir);
	}
	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// `<config dir>/config.toml`, the first default config file.
pub fn default_config_file() -> Result<PathBuf> {
	Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// `<data dir>/storefront.log`, used when no log file is configured.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_is_ignored() {
		assert_eq!(override_dir(None), None);
		assert_eq!(override_dir(Some(OsString::new())), None);
		assert_eq!(
			override_dir(Some(OsString::from("/tmp/storefront"))),
			Some(PathBuf::from("/tmp/storefront"))
		);
	}
}
