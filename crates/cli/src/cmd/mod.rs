//! Command implementations for the hooklint CLI

pub mod files;
pub mod fmt;
pub mod list;
pub mod show;
pub mod validate;
