//! Validate command implementation
//!
//! Checks every schema invariant and reports all violations, not just the
//! first one.

use clap::Args;
use hooklint_config::matcher;
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};

/// Validate command arguments
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Only print violations, not per-entry status
    #[arg(short, long)]
    pub quiet: bool,
}

impl Command for ValidateCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let config = &context.config;
        let mut errors = 0usize;

        if let Some(exclude) = &config.exclude
            && let Err(e) = matcher::compile(exclude)
        {
            errors += 1;
            println!("{} global exclude: {e}", "✗".red());
        }

        for repo in &config.repos {
            match repo.validate() {
                Ok(()) => {
                    if !self.quiet {
                        println!(
                            "{} {} ({} hooks)",
                            "✓".green(),
                            repo.repo.to_string().cyan(),
                            repo.hooks.len()
                        );
                    }
                }
                Err(e) => {
                    errors += 1;
                    println!("{} {}: {e}", "✗".red(), repo.repo.to_string().cyan());
                }
            }
        }

        if errors == 0 {
            if !self.quiet {
                println!(
                    "\n{} {} source entries, {} hooks",
                    "Configuration is valid:".green().bold(),
                    config.repos.len(),
                    config.hook_count()
                );
            }
            Ok(())
        } else {
            Err(CommandError::ValidationFailed {
                errors,
                path: context.config_path.clone(),
            })
        }
    }
}
