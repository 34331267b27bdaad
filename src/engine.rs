use crate::error::MapError;
use crate::ignore::{is_ignored, load_patterns, IgnorePattern};
use crate::options::MapOptions;
use crate::output::write_outputs;
use crate::types::{FileEntry, MapSummary, ScanResult};
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walks `root` once, top-down, and returns every included directory and file.
///
/// An ignored directory is pruned: it is not recorded and nothing under it is
/// visited. Files are tested individually against the matcher; the running
/// executable, the ignore file, and the output document are excluded
/// unconditionally. `root` and `output` must be absolute.
pub fn scan(
    root: &Path,
    patterns: &[IgnorePattern],
    output: &Path,
) -> Result<ScanResult, MapError> {
    if !root.is_dir() {
        return Err(MapError::NotADirectory(root.to_path_buf()));
    }
    let own_exe = env::current_exe().ok();

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !is_ignored(entry.path(), patterns, root, output)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        if entry.file_type().is_dir() {
            dirs.push(rel.to_path_buf());
        } else {
            if own_exe.as_deref() == Some(path) {
                continue;
            }
            if is_ignored(path, patterns, root, output) {
                continue;
            }
            files.push(FileEntry {
                rel: rel.to_path_buf(),
                abs: path.to_path_buf(),
            });
        }
    }

    debug!(dirs = dirs.len(), files = files.len(), "scan complete");
    Ok(ScanResult { dirs, files })
}

/// Runs the whole pipeline: resolve paths, load the ignore config, scan,
/// render, and write the output document(s).
pub fn map_directory(options: &MapOptions) -> Result<MapSummary, MapError> {
    let root = absolutize(&options.root)?;
    if !root.is_dir() {
        return Err(MapError::NotADirectory(root));
    }
    let output = absolutize(&options.output)?;
    let cwd = env::current_dir().map_err(|e| MapError::io(PathBuf::from("."), e))?;

    debug!(root = %root.display(), output = %output.display(), "mapping directory");
    let patterns = load_patterns(options.ignore_file.as_deref(), &cwd, &root)?;
    let scan_result = scan(&root, &patterns, &output)?;
    write_outputs(&root, &scan_result, &output, options.raw)
}

// Lexical resolution against the current directory; the path does not have
// to exist, which matters for the not-yet-written output document.
fn absolutize(path: &Path) -> Result<PathBuf, MapError> {
    std::path::absolute(path).map_err(|e| MapError::io(path, e))
}

/// Reads a file's entire content, replacing invalid UTF-8.
pub(crate) fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
