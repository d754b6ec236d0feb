//! List command implementation
//!
//! Enumerate source entries and the hooks they declare.

use clap::Args;
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// List command arguments
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format (simple, json)
    #[arg(short, long, default_value = "simple")]
    pub format: String,
}

impl Command for ListCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let config = &context.config;

        match self.format.as_str() {
            "json" => {
                let json = serde_json::json!({
                    "config": context.config_path,
                    "repos": config.repos,
                });
                println!("{}", serde_json::to_string_pretty(&json).map_err(anyhow::Error::from)?);
            }
            _ => {
                println!("Configuration: {}", context.config_path.display().cyan());
                println!();

                for repo in &config.repos {
                    match &repo.rev {
                        Some(rev) => {
                            println!("{} {}", repo.repo.to_string().cyan(), format!("(rev: {rev})").dimmed());
                        }
                        None => println!("{}", repo.repo.to_string().cyan()),
                    }

                    for hook in &repo.hooks {
                        if hook.display_name() == hook.id {
                            println!("  • {}", hook.id.green());
                        } else {
                            println!("  • {} ({})", hook.id.green(), hook.display_name());
                        }
                    }
                }

                println!(
                    "\n{} source entries, {} hooks",
                    config.repos.len(),
                    config.hook_count()
                );
            }
        }

        Ok(())
    }
}
