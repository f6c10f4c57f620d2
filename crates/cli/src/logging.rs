//! Log subscriber setup.
//!
//! One-shot screen commands log to stderr so stdout stays parseable. The
//! interactive browser owns the terminal, so its events go to a file through a
//! non-blocking writer instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Overrides the configured level with full `EnvFilter` directives.
pub(crate) const LOG_ENV: &str = "STOREFRONT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogTarget {
	Stderr,
	File(PathBuf),
}

/// Install the global subscriber. The returned guard flushes the file writer
/// when dropped and must live until the program exits.
pub(crate) fn init(level: Level, target: LogTarget) -> Result<Option<WorkerGuard>> {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

	match target {
		LogTarget::Stderr => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(io::stderr).with_target(false))
				.try_init()
				.context("failed to install the log subscriber")?;
			Ok(None)
		}
		LogTarget::File(path) => {
			let (dir, file_name) = split_log_path(&path)?;
			fs::create_dir_all(&dir)
				.with_context(|| format!("failed to create log directory {}", dir.display()))?;

			let (writer, guard) = non_blocking(rolling::never(dir, file_name));
			tracing_subscriber::registry()
				.with(filter)
				.with(
					fmt::layer()
						.with_writer(writer)
						.with_ansi(false)
						.with_thread_names(true),
				)
				.try_init()
				.context("failed to install the log subscriber")?;
			Ok(Some(guard))
		}
	}
}

/// Directory and file name of a log path; a bare file name lives in `.`.
fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
	let file_name = path
		.file_name()
		.ok_or_else(|| anyhow!("log file {} has no file name", path.display()))?;
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	};
	Ok((dir, PathBuf::from(file_name)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_paths_split_into_directory_and_file() {
		let (dir, file) = split_log_path(Path::new("/var/log/storefront.log")).unwrap();
		assert_eq!(dir, PathBuf::from("/var/log"));
		assert_eq!(file, PathBuf::from("storefront.log"));

		let (dir, file) = split_log_path(Path::new("session.log")).unwrap();
		assert_eq!(dir, PathBuf::from("."));
		assert_eq!(file, PathBuf::from("session.log"));

		assert!(split_log_path(Path::new("/")).is_err());
	}
}
