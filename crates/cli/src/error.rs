//! Error types for CLI commands
//!
//! This module defines structured error types using thiserror, providing
//! better type safety than using `anyhow::Error` everywhere.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A hook id named on the command line does not exist
    #[error("Hook '{0}' is not declared in the configuration")]
    UnknownHook(String),

    /// Validation found schema violations
    #[error("Validation failed: {errors} error(s) in {path}", path = .path.display())]
    ValidationFailed {
        /// Number of violations found
        errors: usize,
        /// The offending configuration file
        path: PathBuf,
    },

    /// The configuration file differs from its normalized form
    #[error("{} is not in normalized form (run 'hooklint fmt --write')", .0.display())]
    NotNormalized(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error (for interop with anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Core errors are wrapped through the Other variant
impl From<hooklint_core::Error> for CommandError {
    fn from(err: hooklint_core::Error) -> Self {
        Self::Other(err.into())
    }
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;

impl CommandError {
    /// Create a `Config` error from any error type
    pub fn config<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::io;

    #[test]
    fn test_unknown_hook_error() {
        let error = CommandError::UnknownHook("mypy".to_string());

        let error_msg = error.to_string();
        assert!(error_msg.contains("mypy"));
        assert!(error_msg.contains("not declared"));
    }

    #[test]
    fn test_validation_failed_error() {
        let error = CommandError::ValidationFailed {
            errors: 3,
            path: PathBuf::from(".pre-commit-config.yaml"),
        };

        let error_msg = error.to_string();
        assert!(error_msg.contains('3'));
        assert!(error_msg.contains(".pre-commit-config.yaml"));
    }

    #[test]
    fn test_not_normalized_error() {
        let error = CommandError::NotNormalized(PathBuf::from("pipeline.yaml"));

        let error_msg = error.to_string();
        assert!(error_msg.contains("pipeline.yaml"));
        assert!(error_msg.contains("fmt --write"));
    }

    #[test]
    fn test_config_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "invalid config");
        let error = CommandError::config(io_error);

        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: CommandError = io_error.into();

        assert!(error.to_string().contains("IO error"));
    }

    #[test]
    fn test_core_error_conversion() {
        let core_error = hooklint_core::Error::Message("something went wrong".to_string());
        let error: CommandError = core_error.into();

        assert!(matches!(error, CommandError::Other(_)));
    }
}
