//! Configuration loading and round-trip serialization
//!
//! Handles reading `.pre-commit-config.yaml` into the typed model, upward
//! discovery from a working directory, and writing a structurally-stable
//! normalized form back out.

use crate::pipeline::Config;
use hooklint_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical configuration file name
pub const CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// Alternate spelling some repositories use
pub const CONFIG_FILE_ALT: &str = ".pre-commit-config.yml";

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or does
    /// not parse as a configuration document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Message(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&content).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse configuration from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if YAML parsing fails
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| Error::Message(format!("Failed to parse config YAML: {e}")))
    }

    /// Serialize to the normalized YAML form
    ///
    /// Parsing the returned string yields a structurally equal `Config`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::Message(format!("Failed to serialize config: {e}")))
    }

    /// Save the normalized form to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file write fails
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_yaml_string()?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Message(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        fs::write(path.as_ref(), content).map_err(|e| {
            Error::Message(format!(
                "Failed to write config file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Ok(())
    }
}

/// Find the configuration file governing a directory
///
/// Walks upward from `start_dir`, the way the external runner resolves which
/// configuration applies, checking for [`CONFIG_FILE`] and then
/// [`CONFIG_FILE_ALT`] at each level. Returns the first match.
#[must_use]
pub fn discover(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in [CONFIG_FILE, CONFIG_FILE_ALT] {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!("Found configuration at {}", candidate.display());
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use crate::pipeline::{Hook, Repo, RepoSource};
    use tempfile::TempDir;

    const SAMPLE: &str = "\
repos:
  - repo: https://github.com/psf/black
    rev: 22.3.0
    hooks:
      - id: black
";

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(temp.path().join(CONFIG_FILE));

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_load_success() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, SAMPLE).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.repos.len(), 1);
        assert_eq!(config.repos[0].hooks[0].id, "black");
    }

    #[test]
    fn test_load_invalid_yaml_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "repos: [{{").unwrap();

        let result = Config::load(&path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains(CONFIG_FILE)
        );
    }

    #[test]
    fn test_from_yaml_str_empty_document() {
        // An empty mapping is a valid (if useless) pipeline
        let config = Config::from_yaml_str("{}").unwrap();
        assert!(config.repos.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILE);

        let config = Config {
            repos: vec![Repo {
                repo: RepoSource::from("https://github.com/psf/black"),
                rev: Some("22.3.0".to_string()),
                hooks: vec![Hook {
                    id: "black".to_string(),
                    types: vec!["python".to_string()],
                    ..serde_yaml::from_str("id: black").unwrap()
                }],
            }],
            exclude: Some("^vendor/".to_string()),
            fail_fast: true,
            ..Config::default()
        };

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_discover_in_current_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), SAMPLE).unwrap();

        let found = discover(temp.path()).unwrap();
        assert_eq!(found, temp.path().join(CONFIG_FILE));
    }

    #[test]
    fn test_discover_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), SAMPLE).unwrap();

        let nested = temp.path().join("src").join("pkg");
        fs::create_dir_all(&nested).unwrap();

        let found = discover(&nested).unwrap();
        assert_eq!(found, temp.path().join(CONFIG_FILE));
    }

    #[test]
    fn test_discover_alternate_spelling() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_ALT), SAMPLE).unwrap();

        let found = discover(temp.path()).unwrap();
        assert_eq!(found, temp.path().join(CONFIG_FILE_ALT));
    }

    #[test]
    fn test_discover_prefers_canonical_spelling() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), SAMPLE).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_ALT), SAMPLE).unwrap();

        let found = discover(temp.path()).unwrap();
        assert_eq!(found, temp.path().join(CONFIG_FILE));
    }

    #[test]
    fn test_discover_none() {
        let temp = TempDir::new().unwrap();
        assert!(discover(temp.path()).is_none());
    }
}
