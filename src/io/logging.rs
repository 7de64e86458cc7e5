use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TASKPAD_LOG";

const DEFAULT_FILTER: &str = "taskpad=info";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install logger: {0}")]
    Install(String),
}

/// Filter from `TASKPAD_LOG`, falling back to info for this crate
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send tracing output to `path` (appending). The terminal belongs to the
/// TUI, so logs never go to stdout/stderr.
pub fn init_file_logging(path: &Path) -> Result<(), LogError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LogError::Install(e.to_string()))
}
