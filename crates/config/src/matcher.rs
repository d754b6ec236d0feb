//! Hook file-filter evaluation
//!
//! A hook declaration narrows the files it sees with `types`, `files`, and
//! `exclude`, on top of the document-wide `exclude`. This module compiles
//! those declarations into a single predicate over paths.
//!
//! Patterns use search semantics: they match anywhere in the path unless the
//! pattern anchors itself (`^tests/`), mirroring the external runner.

use crate::pipeline::{Config, Hook};
use hooklint_core::{Error, Result, filetype};
use regex::Regex;
use std::path::Path;

/// Compile a path pattern from the configuration
///
/// # Errors
///
/// Returns [`Error::Pattern`] carrying the pattern as written when it does
/// not compile as a regular expression.
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Compiled file filter for one hook declaration
///
/// Evaluation order: global exclude, then the hook's `files` include, then
/// the hook's `exclude`, then `types` tags (all declared tags must hold).
pub struct HookFilter {
    types: Vec<String>,
    files: Option<Regex>,
    exclude: Option<Regex>,
    global_exclude: Option<Regex>,
}

impl HookFilter {
    /// Build the filter for a hook within its document
    ///
    /// # Errors
    ///
    /// Returns an error if any involved pattern fails to compile.
    pub fn new(config: &Config, hook: &Hook) -> Result<Self> {
        Ok(Self {
            types: hook.types.clone(),
            files: hook.files.as_deref().map(compile).transpose()?,
            exclude: hook.exclude.as_deref().map(compile).transpose()?,
            global_exclude: config.exclude.as_deref().map(compile).transpose()?,
        })
    }

    /// Check whether the hook's declared filters select this path
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if let Some(pattern) = &self.global_exclude
            && pattern.is_match(&path_str)
        {
            return false;
        }

        if let Some(pattern) = &self.files
            && !pattern.is_match(&path_str)
        {
            return false;
        }

        if let Some(pattern) = &self.exclude
            && pattern.is_match(&path_str)
        {
            return false;
        }

        self.types.iter().all(|tag| filetype::path_has_tag(path, tag))
    }

    /// Select the matching subset of `paths`, preserving order
    pub fn select<'a, P: AsRef<Path>>(&self, paths: &'a [P]) -> Vec<&'a Path> {
        paths
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| self.matches(path))
            .collect()
    }
}
