//! Core types and utilities for hooklint
//!
//! This is the foundation crate that all other hooklint crates depend on.
//! It provides:
//! - Base error types
//! - File-type tag classification for hook filters
//!
//! This crate has no dependencies on other hooklint crates.

pub mod error;
pub mod filetype;

pub use error::{Error, Result};
