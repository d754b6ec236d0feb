//! Common utilities and types shared across CLI commands

use anyhow::Result;
use hooklint_config::{CONFIG_FILE, Config};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runtime context for CLI commands
///
/// Consolidates the loaded configuration and its resolved path so commands
/// receive one context instead of repeated parameters. The configuration is
/// shared via `Arc` (the document is read once and never mutated during a
/// run).
#[derive(Clone)]
pub struct RuntimeContext {
    /// Shared configuration
    pub config: Arc<Config>,
    /// Path the configuration was loaded from
    pub config_path: PathBuf,
}

impl RuntimeContext {
    /// Resolve the configuration file and load it
    ///
    /// An explicit `--config` path wins; otherwise the file is discovered by
    /// walking upward from the current directory, the way the external
    /// runner resolves which configuration applies.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration file can be found, or if the
    /// file cannot be read or parsed.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                hooklint_config::discover(&cwd).ok_or_else(|| {
                    anyhow::anyhow!(
                        "No {CONFIG_FILE} found in {} or any parent directory. \
                         Specify one with --config.",
                        cwd.display()
                    )
                })?
            }
        };

        let config = Config::load(&path)?;
        tracing::debug!(
            repos = config.repos.len(),
            hooks = config.hook_count(),
            "Loaded configuration from {}",
            path.display()
        );

        Ok(Self {
            config: Arc::new(config),
            config_path: path,
        })
    }

    /// Create a context from already-loaded parts
    ///
    /// Useful for tests and for callers that loaded the configuration
    /// themselves.
    pub fn from_parts(config: Arc<Config>, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }
}
