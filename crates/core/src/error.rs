//! Base error types for hooklint
//!
//! This module provides the foundation error types that all crates can use.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Path of the offending document
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Source entry violates the schema
    #[error("Invalid source entry: {0}")]
    Source(String),

    /// Hook declaration violates the schema
    #[error("Invalid hook declaration: {0}")]
    Hook(String),

    /// A path pattern failed to compile
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern {
        /// The pattern as written in the configuration
        pattern: String,
        /// Compiler diagnostic
        message: String,
    },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
