//! File-type tag classification
//!
//! Hook declarations restrict themselves to content types with `types:`
//! filters (`types: [python]`). This module maps a path to the set of tags
//! it carries. Classification is by file name only (extension plus a few
//! well-known basenames); the file is never opened.

use std::path::Path;

/// Tags that classification can produce.
///
/// `types:` values outside this set are not rejected (the tag vocabulary is
/// open), but validation warns about them since a typo silently disables a
/// hook for every file.
pub const KNOWN_TAGS: &[&str] = &[
    "file",
    "text",
    "binary",
    "python",
    "yaml",
    "json",
    "toml",
    "ini",
    "rust",
    "go",
    "c",
    "javascript",
    "typescript",
    "shell",
    "markdown",
    "html",
    "css",
    "xml",
    "csv",
    "dockerfile",
    "makefile",
    "plain-text",
];

/// Extension to content-type tag, for text files.
const TEXT_EXTENSIONS: &[(&str, &str)] = &[
    ("py", "python"),
    ("pyi", "python"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("json", "json"),
    ("toml", "toml"),
    ("ini", "ini"),
    ("cfg", "ini"),
    ("rs", "rust"),
    ("go", "go"),
    ("c", "c"),
    ("h", "c"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("ts", "typescript"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("zsh", "shell"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("html", "html"),
    ("htm", "html"),
    ("css", "css"),
    ("xml", "xml"),
    ("csv", "csv"),
    ("txt", "plain-text"),
];

/// Extensions classified as binary.
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "ico", "pdf", "zip", "gz", "tar", "whl", "pyc", "so", "dylib",
    "exe",
];

/// Well-known basenames with no meaningful extension.
const BASENAME_TAGS: &[(&str, &str)] = &[("Dockerfile", "dockerfile"), ("Makefile", "makefile")];

/// Classify a path into its content-type tags.
///
/// Every path carries `file`. Recognized text formats additionally carry
/// `text` and their format tag; recognized binary formats carry `binary`.
/// Unrecognized names carry only `file`.
#[must_use]
pub fn tags_for_path(path: &Path) -> Vec<&'static str> {
    let mut tags = vec!["file"];

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        for &(basename, tag) in BASENAME_TAGS {
            if name == basename {
                tags.push("text");
                tags.push(tag);
                return tags;
            }
        }
    }

    let Some(ext) = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
    else {
        return tags;
    };

    for &(known, tag) in TEXT_EXTENSIONS {
        if ext == known {
            tags.push("text");
            tags.push(tag);
            return tags;
        }
    }

    if BINARY_EXTENSIONS.contains(&ext.as_str()) {
        tags.push("binary");
    }

    tags
}

/// Check whether a path carries the given tag
#[must_use]
pub fn path_has_tag(path: &Path, tag: &str) -> bool {
    tags_for_path(path).contains(&tag)
}

/// Check whether a tag belongs to the known vocabulary
#[must_use]
pub fn is_known_tag(tag: &str) -> bool {
    KNOWN_TAGS.contains(&tag)
}
