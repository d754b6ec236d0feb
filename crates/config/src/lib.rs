//! Pipeline configuration for hooklint
//!
//! This crate handles:
//! - The configuration schema (source entries and hook declarations)
//! - YAML loading, discovery, and round-trip serialization
//! - Schema validation
//! - Hook file-filter evaluation
//! - Logging initialization

pub mod loader;
pub mod logging;
pub mod matcher;
pub mod pipeline;

// Re-export error types from core
pub use hooklint_core::{Error, Result};

// Re-export main types
pub use loader::{CONFIG_FILE, CONFIG_FILE_ALT, discover};
pub use matcher::HookFilter;
pub use pipeline::{Config, Hook, Repo, RepoSource};
