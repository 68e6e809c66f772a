//! Command-line interface for postman-export
//!
//! Provides the `collections` and `environments` subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_settings;

mod collections;
mod environments;

/// Export Postman workspace collections and environments to JSON files
#[derive(Parser)]
#[command(name = "postman-export")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file (defaults to ./postman-export.toml when present)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge collections of the target workspaces into one collection file
    Collections,

    /// Export every environment to its own JSON file
    Environments,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    load_dotenv(&cwd);
    let settings = load_settings(&cwd, cli.config.as_deref())?;

    match cli.command {
        Commands::Collections => collections::run(&settings),
        Commands::Environments => environments::run(&settings),
    }
}

/// Load `.env` from the working directory. Variables already set in the process win.
fn load_dotenv(dir: &Path) {
    let env_file = dir.join(".env");
    if !env_file.is_file() {
        return;
    }
    if let Err(err) = dotenvy::from_path(&env_file) {
        tracing::warn!("Failed to load {}: {}", env_file.display(), err);
    }
}
