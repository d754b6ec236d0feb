//! Files command implementation
//!
//! Evaluate a hook's declared filters (global exclude, files, exclude,
//! types) against caller-supplied paths. This interprets the declared data
//! only; nothing is executed and no repository state is read.

use clap::Args;
use hooklint_config::HookFilter;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::{CommandError, Result};

/// Files command arguments
#[derive(Debug, Args)]
pub struct FilesCommand {
    /// Id of the hook whose filters to evaluate
    pub id: String,

    /// Paths to evaluate against the hook's filters
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

impl Command for FilesCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let declarations = context.config.find_hooks(&self.id);

        let Some((_, hook)) = declarations.first() else {
            return Err(CommandError::UnknownHook(self.id.clone()));
        };

        if declarations.len() > 1 {
            tracing::warn!(
                hook_id = %self.id,
                declarations = declarations.len(),
                "Hook is declared more than once; evaluating the first declaration"
            );
        }

        let filter = HookFilter::new(&context.config, hook)?;
        let selected = filter.select(&self.paths);

        for path in &selected {
            println!("{}", path.display());
        }

        println!(
            "{}",
            format!("{} of {} paths selected", selected.len(), self.paths.len()).dimmed()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use hooklint_config::Config;
    use std::sync::Arc;

    fn context_for(yaml: &str) -> RuntimeContext {
        let config = Config::from_yaml_str(yaml).unwrap();
        RuntimeContext::from_parts(Arc::new(config), PathBuf::from("test.yaml"))
    }

    #[test]
    fn test_unknown_hook() {
        let context = context_for("repos: []");

        let cmd = FilesCommand {
            id: "black".to_string(),
            paths: vec![PathBuf::from("a.py")],
        };

        assert!(matches!(
            cmd.execute(&context),
            Err(CommandError::UnknownHook(_))
        ));
    }

    #[test]
    fn test_known_hook_evaluates() {
        let yaml = "repos:\n  - repo: local\n    hooks:\n      - id: pylint\n        entry: pylint\n        language: system\n        types: [python]\n";
        let context = context_for(yaml);

        let cmd = FilesCommand {
            id: "pylint".to_string(),
            paths: vec![PathBuf::from("a.py"), PathBuf::from("README.md")],
        };

        assert!(cmd.execute(&context).is_ok());
    }
}
