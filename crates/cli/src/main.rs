mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{Command, parse_cli};
use logging::LogTarget;
use settings::ResolvedConfig;
use storefront_core::app_dirs;
use tracing::debug;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in storefront_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved
			.print_summary()
			.context("failed to print the configuration summary")?;
	}

	let interactive = matches!(cli.command, None | Some(Command::Browse(_)));
	let _guard = logging::init(resolved.log_level, log_target(interactive, &resolved)?)?;
	debug!(?resolved, "configuration resolved");

	workflow::run(cli.command, cli.output, &resolved)
}

fn log_target(interactive: bool, config: &ResolvedConfig) -> Result<LogTarget> {
	if !interactive {
		return Ok(LogTarget::Stderr);
	}
	let path = match &config.log_file {
		Some(path) => path.clone(),
		None => app_dirs::default_log_file()?,
	};
	Ok(LogTarget::File(path))
}
