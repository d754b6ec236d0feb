//! hooklint CLI library
//!
//! This library contains all the CLI logic for hooklint, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// hooklint - lint and inspect pre-commit pipeline configuration
#[derive(Parser)]
#[command(name = "hooklint")]
#[command(about = "Lint and inspect pre-commit pipeline configuration")]
#[command(version)]
#[command(long_about = "Lint and inspect pre-commit pipeline configuration

A fast validator for .pre-commit-config.yaml files, written in Rust.

Features:
  • Schema validation (revision pins, local hook requirements, patterns)
  • Per-hook file-filter evaluation (types, files, exclude)
  • Normalized, round-trip stable re-serialization")]
pub struct Cli {
    /// Path to the configuration file (discovered from the current
    /// directory when omitted)
    #[arg(short, long, env = "HOOKLINT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "HOOKLINT_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the hooklint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Validate the configuration against the schema
    Validate(cmd::validate::ValidateCommand),

    /// List source entries and their hooks
    List(cmd::list::ListCommand),

    /// Show every declaration of a hook id
    Show(cmd::show::ShowCommand),

    /// Show which of the given paths a hook's declared filters select
    Files(cmd::files::FilesCommand),

    /// Print or rewrite the configuration in normalized form
    Fmt(cmd::fmt::FmtCommand),
}

/// Execute the command based on the command type
fn execute_command(command: Commands, context: &RuntimeContext) -> Result<()> {
    match command {
        Commands::Validate(validate_cmd) => {
            validate_cmd.execute(context)?;
        }
        Commands::List(list_cmd) => {
            list_cmd.execute(context)?;
        }
        Commands::Show(show_cmd) => {
            show_cmd.execute(context)?;
        }
        Commands::Files(files_cmd) => {
            files_cmd.execute(context)?;
        }
        Commands::Fmt(fmt_cmd) => {
            fmt_cmd.execute(context)?;
        }
    }

    Ok(())
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - Configuration loading fails
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    hooklint_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    // Resolve and load the configuration
    let context = RuntimeContext::resolve(cli.config.as_deref())?;

    // Execute the command
    execute_command(cli.command, &context)
}
