use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::cli::commands::{Cli, Commands, ConfigArgs};
use crate::io::config_io::{self, ConfigError};
use crate::io::logging::{self, LogError};
use crate::model::Config;

/// Top-level error for a taskpad run
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }
    let config = config_io::load_config(cli.config.as_deref())?;

    match cli.command {
        None => {
            info!("starting tui");
            crate::tui::run(&config)?;
            Ok(())
        }
        Some(Commands::Config(args)) => {
            let stdout = std::io::stdout();
            cmd_config(&mut stdout.lock(), cli.config.as_deref(), &config, &args)
        }
    }
}

/// Print the config path or the effective config as TOML
fn cmd_config(
    out: &mut impl Write,
    explicit: Option<&Path>,
    config: &Config,
    args: &ConfigArgs,
) -> Result<(), AppError> {
    if args.path {
        match config_io::resolve_config_path(explicit) {
            Some(path) => writeln!(out, "{}", path.display())?,
            None => writeln!(out, "(no config directory on this platform)")?,
        }
    } else {
        write!(out, "{}", config_io::config_to_string(config)?)?;
    }
    Ok(())
}
