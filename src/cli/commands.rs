use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskpad", about = concat!("[x] taskpad v", env!("CARGO_PKG_VERSION"), " - a small to-do list for your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read settings from this file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with TASKPAD_LOG, e.g. TASKPAD_LOG=debug)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Print only the path of the config file that would be read
    #[arg(long)]
    pub path: bool,
}
