use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single included file discovered during the scan.
///
/// Carries no content; file bytes are read lazily while rendering, so memory
/// use scales with the number of entries rather than their sizes.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scan root.
    pub rel: PathBuf,
    /// Absolute path, used for reading content and binary sniffing.
    pub abs: PathBuf,
}

/// Everything one walk of the tree produced.
///
/// Fully materialized: both collections are consumed twice by the renderer,
/// once for the directory-structure view and once for the content dump.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResult {
    /// Included directories, relative to the root. The root itself is
    /// implicit and never listed here.
    pub dirs: Vec<PathBuf>,
    /// Included files in traversal order; the renderer re-sorts.
    pub files: Vec<FileEntry>,
}

/// Totals and output locations reported after a completed run.
#[derive(Debug, Serialize, Deserialize)]
pub struct MapSummary {
    /// Directory count including the implicit root.
    pub dir_count: usize,
    pub file_count: usize,
    pub output: PathBuf,
    /// Set when the plain-text variant was also written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<PathBuf>,
}

/// Renders a relative path with forward slashes regardless of platform, the
/// form used for pattern matching, anchors, sorting, and document headings.
pub(crate) fn path_to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
