//! Command trait for the hooklint CLI
//!
//! This module defines the `Command` trait that all hooklint commands
//! implement. It provides a uniform interface for command execution, making
//! it easier to test, extend, and maintain commands.

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all hooklint commands
///
/// Commands receive a `RuntimeContext` containing the loaded configuration
/// and its resolved path. Commands can specify their return type via the
/// `Output` associated type; most return `()`.
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails to execute. Error
    /// messages should be descriptive enough for the user to understand what
    /// went wrong.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
