//! Fmt command implementation
//!
//! Re-serialize the configuration in its normalized form. The normalized
//! form is round-trip stable: parsing it yields a structurally equal
//! document.

use clap::Args;
use hooklint_config::Config;
use owo_colors::OwoColorize;
use std::fs;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};

/// Fmt command arguments
#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Verify the file is already normalized, without writing
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Rewrite the configuration file in place
    #[arg(short, long)]
    pub write: bool,
}

impl Command for FmtCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let config = &context.config;
        let normalized = config.to_yaml_string()?;

        // Round-trip stability is a contract of the normalized form
        let reparsed = Config::from_yaml_str(&normalized)?;
        if reparsed != **config {
            return Err(anyhow::anyhow!(
                "normalized form does not parse back to an equivalent document; \
                 this is a bug in hooklint"
            )
            .into());
        }

        if self.check {
            let on_disk = fs::read_to_string(&context.config_path)?;
            if on_disk == normalized {
                println!("{} {}", "✓".green(), context.config_path.display());
                Ok(())
            } else {
                Err(CommandError::NotNormalized(context.config_path.clone()))
            }
        } else if self.write {
            fs::write(&context.config_path, normalized)?;
            println!("Rewrote {}", context.config_path.display().cyan());
            Ok(())
        } else {
            print!("{normalized}");
            Ok(())
        }
    }
}
