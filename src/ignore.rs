//! Loading and evaluation of `.cmignore` exclusion patterns.
//!
//! The format is a line-oriented subset of gitignore: blank lines and `#`
//! comments are skipped, a trailing `/` marks a directory pattern and is
//! stripped, a leading `/` anchors the pattern to the scan root, and a
//! leading `**/` matches the basename at any depth. Matching is
//! existence-based; pattern order never changes the outcome.

use crate::error::MapError;
use crate::glob::glob_match;
use crate::types::path_to_slash;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional name of the ignore-config file.
pub const IGNORE_FILE_NAME: &str = ".cmignore";

/// One parsed exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnorePattern {
    /// Glob body with the `/` or `**/` prefix already stripped.
    pub pattern: String,
    /// Leading `/`: match the root-relative path only, at the root position.
    pub anchored: bool,
    /// Leading `**/`: match the basename only, at any depth.
    pub basename_any_depth: bool,
}

impl IgnorePattern {
    /// Parses one non-comment line of an ignore file.
    pub fn parse(line: &str) -> Self {
        let line = line.strip_suffix('/').unwrap_or(line);
        if let Some(rest) = line.strip_prefix('/') {
            Self {
                pattern: rest.to_string(),
                anchored: true,
                basename_any_depth: false,
            }
        } else if let Some(rest) = line.strip_prefix("**/") {
            Self {
                pattern: rest.to_string(),
                anchored: false,
                basename_any_depth: true,
            }
        } else {
            Self {
                pattern: line.to_string(),
                anchored: false,
                basename_any_depth: false,
            }
        }
    }
}

/// Locates and parses the ignore file.
///
/// The first existing source wins, with no merging: an explicitly supplied
/// path, then `.cmignore` in `cwd`, then `.cmignore` in the scan root. When
/// none exists the pattern set is empty and nothing beyond the hard
/// exclusions is filtered out. Invalid UTF-8 in the file is replaced, never
/// fatal; an unreadable file that was selected is an error.
pub fn load_patterns(
    explicit: Option<&Path>,
    cwd: &Path,
    root: &Path,
) -> Result<Vec<IgnorePattern>, MapError> {
    let source = if let Some(path) = explicit.filter(|p| p.exists()) {
        path.to_path_buf()
    } else if cwd.join(IGNORE_FILE_NAME).exists() {
        cwd.join(IGNORE_FILE_NAME)
    } else if root.join(IGNORE_FILE_NAME).exists() {
        root.join(IGNORE_FILE_NAME)
    } else {
        debug!("no ignore file found, all files will be included");
        return Ok(Vec::new());
    };

    debug!(path = %source.display(), "loading ignore patterns");
    let bytes = fs::read(&source).map_err(|e| MapError::io(&source, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(IgnorePattern::parse)
        .collect())
}

/// Decides whether `path` is excluded.
///
/// `path` and `output` must be absolute; `root` is the scan root the
/// relative form is computed against. Checks run in a fixed order and
/// short-circuit: ignore-file basename, output-path equality, then each
/// pattern.
pub fn is_ignored(
    path: &Path,
    patterns: &[IgnorePattern],
    root: &Path,
    output: &Path,
) -> bool {
    if path.file_name().is_some_and(|name| name == IGNORE_FILE_NAME) {
        return true;
    }
    if path == output {
        return true;
    }

    let rel = path_to_slash(path.strip_prefix(root).unwrap_or(path));
    let basename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    patterns.iter().any(|p| {
        if p.anchored {
            glob_match(&p.pattern, &rel)
        } else if p.basename_any_depth {
            glob_match(&p.pattern, &basename)
        } else {
            glob_match(&p.pattern, &rel) || glob_match(&p.pattern, &basename)
        }
    })
}
