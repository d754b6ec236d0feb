//! Show command implementation
//!
//! Detail every declaration of a hook id across source entries. The same id
//! may legitimately appear more than once (e.g. a linter run under two
//! invocation modes).

use clap::Args;
use hooklint_config::{Hook, Repo};
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};

/// Show command arguments
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the hook to show
    pub id: String,
}

impl Command for ShowCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let declarations = context.config.find_hooks(&self.id);

        if declarations.is_empty() {
            return Err(CommandError::UnknownHook(self.id.clone()));
        }

        println!(
            "{} ({} declaration{})",
            self.id.green().bold(),
            declarations.len(),
            if declarations.len() == 1 { "" } else { "s" }
        );

        for (repo, hook) in declarations {
            println!();
            print_declaration(repo, hook);
        }

        Ok(())
    }
}

fn print_declaration(repo: &Repo, hook: &Hook) {
    match &repo.rev {
        Some(rev) => println!(
            "source: {} {}",
            repo.repo.to_string().cyan(),
            format!("(rev: {rev})").dimmed()
        ),
        None => println!("source: {}", repo.repo.to_string().cyan()),
    }

    if let Some(name) = &hook.name {
        println!("  name: {name}");
    }
    if let Some(entry) = &hook.entry {
        println!("  entry: {entry}");
    }
    if let Some(language) = &hook.language {
        println!("  language: {language}");
    }
    if !hook.types.is_empty() {
        println!("  types: {}", hook.types.join(", "));
    }
    if let Some(files) = &hook.files {
        println!("  files: {files}");
    }
    if let Some(exclude) = &hook.exclude {
        println!("  exclude: {exclude}");
    }
    if !hook.args.is_empty() {
        println!("  args: {}", hook.args.join(" "));
    }
    if !hook.additional_dependencies.is_empty() {
        println!(
            "  additional_dependencies: {}",
            hook.additional_dependencies.join(", ")
        );
    }
    for (key, value) in &hook.extra {
        if let Ok(rendered) = serde_yaml::to_string(value) {
            println!("  {key}: {}", rendered.trim_end().dimmed());
        }
    }
}
