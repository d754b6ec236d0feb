//! Pipeline configuration schema
//!
//! Defines the typed model for `.pre-commit-config.yaml`: the top-level
//! document, source entries, and hook declarations, together with the
//! validation rules each of them must satisfy.

use hooklint_core::{Error, Result, filetype};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Execution environment tags the external runner understands.
///
/// The set is open (new runners add languages), so an unknown tag is a
/// warning rather than an error.
const KNOWN_LANGUAGES: &[&str] = &[
    "system",
    "script",
    "python",
    "node",
    "ruby",
    "rust",
    "golang",
    "docker",
    "docker_image",
    "fail",
    "pygrep",
];

/// Where a source entry's hooks come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// Hooks defined by the repository being checked itself
    Local,
    /// Hooks fetched from an external repository
    Url(String),
}

impl RepoSource {
    /// The sentinel spelling of a local source
    pub const LOCAL: &'static str = "local";

    /// Check whether this is the `local` sentinel
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, RepoSource::Local)
    }

    /// The string form as it appears in the document
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            RepoSource::Local => Self::LOCAL,
            RepoSource::Url(url) => url,
        }
    }
}

impl From<&str> for RepoSource {
    fn from(s: &str) -> Self {
        if s == Self::LOCAL {
            RepoSource::Local
        } else {
            RepoSource::Url(s.to_string())
        }
    }
}

impl fmt::Display for RepoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RepoSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RepoSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(RepoSource::from(s.as_str()))
    }
}

/// A single hook declaration within a source entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    /// Hook identifier, resolved within the declaring source
    pub id: String,

    /// Display name overriding the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Command to run (only meaningful for local hooks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Execution environment tag, e.g. "system"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Content-type filters restricting which files the hook sees
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Include pattern (path regular expression)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,

    /// Exclude pattern (path regular expression)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Literal command-line flags, order-preserving
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Package specifiers installed into the hook environment before first
    /// run, order-preserving
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,

    /// Options the model does not interpret, preserved across round-trips
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Hook {
    /// Name shown to users (explicit name, falling back to the id)
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Validate this declaration
    ///
    /// `local` marks hooks declared under a `repo: local` entry, which must
    /// be self-contained: the runner has no source repository to resolve the
    /// id against, so `entry` and `language` are required.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (empty id, a local hook without
    /// `entry` or `language`, or an uncompilable `files`/`exclude` pattern).
    pub fn validate(&self, local: bool) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Hook("hook id cannot be empty".to_string()));
        }

        if local {
            match &self.entry {
                None => {
                    return Err(Error::Hook(format!(
                        "local hook '{}' must declare an 'entry'",
                        self.id
                    )));
                }
                Some(entry) if entry.trim().is_empty() => {
                    return Err(Error::Hook(format!(
                        "local hook '{}' has an empty 'entry'",
                        self.id
                    )));
                }
                Some(_) => {}
            }

            if self.language.as_deref().is_none_or(str::is_empty) {
                return Err(Error::Hook(format!(
                    "local hook '{}' must declare a 'language'",
                    self.id
                )));
            }
        }

        if let Some(language) = &self.language
            && !KNOWN_LANGUAGES.contains(&language.as_str())
        {
            tracing::warn!(
                hook_id = %self.id,
                language = %language,
                "Hook declares unknown language (typo?). Known languages: {}",
                KNOWN_LANGUAGES.join(", ")
            );
        }

        for tag in &self.types {
            if !filetype::is_known_tag(tag) {
                tracing::warn!(
                    hook_id = %self.id,
                    tag = %tag,
                    "Hook filters on unknown file type (typo?)"
                );
            }
        }

        if let Some(files) = &self.files {
            crate::matcher::compile(files)?;
        }
        if let Some(exclude) = &self.exclude {
            crate::matcher::compile(exclude)?;
        }

        Ok(())
    }
}

/// A source entry: one repository's worth of hook declarations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    /// Source URL, or the sentinel `local`
    pub repo: RepoSource,

    /// Revision pin, required for every non-local source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    /// Ordered hook declarations
    #[serde(default)]
    pub hooks: Vec<Hook>,
}

impl Repo {
    /// Validate this source entry and every hook it declares
    ///
    /// # Errors
    ///
    /// Returns an error if a non-local source lacks a revision pin, the
    /// source URL is empty, or any hook declaration is invalid.
    pub fn validate(&self) -> Result<()> {
        match &self.repo {
            RepoSource::Local => {
                if let Some(rev) = &self.rev {
                    tracing::warn!(rev = %rev, "Local source carries a rev, which has no effect");
                }
            }
            RepoSource::Url(url) => {
                if url.trim().is_empty() {
                    return Err(Error::Source("source repo URL cannot be empty".to_string()));
                }
                if self.rev.as_deref().is_none_or(|rev| rev.trim().is_empty()) {
                    return Err(Error::Source(format!(
                        "source '{url}' must pin a non-empty 'rev'"
                    )));
                }
            }
        }

        if self.hooks.is_empty() {
            tracing::warn!(repo = %self.repo, "Source entry declares no hooks");
        }

        for hook in &self.hooks {
            hook.validate(self.repo.is_local())?;
        }

        Ok(())
    }
}

/// Top-level pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Ordered source entries
    #[serde(default)]
    pub repos: Vec<Repo>,

    /// Global path exclusion applied before any per-hook filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Stop the pipeline at the first failing hook
    #[serde(default, skip_serializing_if = "is_false")]
    pub fail_fast: bool,

    /// Top-level keys the model does not interpret, preserved across
    /// round-trips
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Config {
    /// Validate the whole document
    ///
    /// # Errors
    ///
    /// Returns the first schema violation found: an uncompilable global
    /// exclude pattern, or any invalid source entry or hook declaration.
    pub fn validate(&self) -> Result<()> {
        if let Some(exclude) = &self.exclude {
            crate::matcher::compile(exclude)?;
        }

        for key in self.extra.keys() {
            tracing::debug!(key = %key, "Top-level key is carried but not interpreted");
        }

        for repo in &self.repos {
            repo.validate()?;
        }

        Ok(())
    }

    /// Total number of hook declarations across all sources
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|r| r.hooks.len()).sum()
    }

    /// Find every declaration of a hook id, in document order
    pub fn find_hooks<'a>(&'a self, id: &str) -> Vec<(&'a Repo, &'a Hook)> {
        self.repos
            .iter()
            .flat_map(|repo| repo.hooks.iter().map(move |hook| (repo, hook)))
            .filter(|(_, hook)| hook.id == id)
            .collect()
    }
}
