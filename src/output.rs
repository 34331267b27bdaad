//! Rendering of scan results into the output documents.
//!
//! Two variants are produced from the same [`ScanResult`]: the primary
//! Markdown document (linked table of contents, fenced file contents,
//! summary) and an optional plain-text document (line-drawing tree plus a
//! flat content dump). File content is read here, not during the scan, and
//! a file that fails to read gets an inline error marker while the rest of
//! the document is still produced.

use crate::anchor::make_id;
use crate::detect::is_binary;
use crate::engine::read_lossy;
use crate::error::MapError;
use crate::tree::{build_dir_tree, build_tree, DirNode, TreeNode};
use crate::types::{path_to_slash, FileEntry, MapSummary, ScanResult};
use chrono::Local;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Renders the Markdown document.
///
/// `generated_at` is supplied by the caller rather than read from the clock,
/// so rendering the same scan twice produces byte-identical output.
pub fn render_markdown(root: &Path, scan: &ScanResult, generated_at: &str) -> String {
    let mut out = String::with_capacity(4096);
    let root_name = dir_label(root);

    out.push_str(&format!("# Codebase Map: {}\n\n", root_name));
    out.push_str(&format!("Generated by codemapper on {}\n\n", generated_at));
    out.push_str(&format!("Base directory: `{}`\n\n", root.display()));
    out.push_str("---\n\n");

    out.push_str("# Directory Structure\n\n");
    out.push_str(&format!("- 📂 **{}** (ROOT)\n", root_name));

    let files_by_dir = group_files_by_dir(scan);
    if let Some(names) = files_by_dir.get("") {
        for rel in names {
            write_file_link(&mut out, rel, 2);
        }
    }
    let dir_tree = build_dir_tree(scan);
    write_md_tree(&mut out, &dir_tree, "", 1, &files_by_dir);

    out.push_str("\n---\n\n");
    out.push_str("# File Contents\n\n");

    for file in sorted_files(scan) {
        let rel = path_to_slash(&file.rel);
        out.push_str(&format!("<a id='{}'></a>\n\n", make_id(&rel)));
        out.push_str(&format!("## {}\n\n", rel));

        if is_binary(&file.abs) {
            out.push_str("*[BINARY FILE - CONTENTS SKIPPED]*\n\n");
            continue;
        }
        match read_lossy(&file.abs) {
            Ok(content) => {
                let lang = language_from_extension(&file.rel);
                out.push_str(&format!("```{}\n", lang));
                out.push_str(&content);
                if !content.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n\n");
            }
            Err(err) => {
                warn!(path = %file.abs.display(), error = %err, "failed to read file");
                out.push_str(&format!("*[ERROR: {}]*\n\n", err));
            }
        }
    }

    out.push_str("# Summary\n\n");
    out.push_str(&format!(
        "- **Total directories:** {} (including root)\n",
        scan.dirs.len() + 1
    ));
    out.push_str(&format!("- **Total files:** {}\n", scan.files.len()));
    out
}

/// Renders the plain-text variant: a line-drawing tree followed by a flat
/// dump of path plus content per file. No anchors, fences, or language tags.
pub fn render_text(root: &Path, scan: &ScanResult) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("DIRECTORY STRUCTURE:\n\n");
    out.push_str(&format!("{}\n", dir_label(root)));
    let tree = build_tree(scan);
    write_text_tree(&mut out, &tree, "");

    out.push_str("\nFILE CONTENTS:\n\n");
    for file in sorted_files(scan) {
        let rel = path_to_slash(&file.rel);
        if is_binary(&file.abs) {
            out.push_str(&format!("{} [BINARY]\n\n", rel));
            continue;
        }
        match read_lossy(&file.abs) {
            Ok(content) => {
                out.push_str(&format!("{}\n", rel));
                out.push_str(&content);
                if !content.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\n');
            }
            Err(err) => out.push_str(&format!("{} [ERROR: {}]\n\n", rel, err)),
        }
    }
    out
}

/// Renders and writes the Markdown document, and the text variant when
/// `raw` is set. Each document is buffered fully and written once; a write
/// failure aborts the run.
pub fn write_outputs(
    root: &Path,
    scan: &ScanResult,
    output: &Path,
    raw: bool,
) -> Result<MapSummary, MapError> {
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let doc = render_markdown(root, scan, &generated_at);
    fs::write(output, doc).map_err(|e| MapError::io(output, e))?;

    let raw_output = if raw {
        let path = raw_output_path(output);
        fs::write(&path, render_text(root, scan)).map_err(|e| MapError::io(&path, e))?;
        Some(path)
    } else {
        None
    };

    Ok(MapSummary {
        dir_count: scan.dirs.len() + 1,
        file_count: scan.files.len(),
        output: output.to_path_buf(),
        raw_output,
    })
}

// ----------------------- Internal helpers -----------------------

/// Root label: the directory's basename, or the full path for roots like `/`.
fn dir_label(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

fn sorted_files(scan: &ScanResult) -> Vec<&FileEntry> {
    let mut files: Vec<&FileEntry> = scan.files.iter().collect();
    files.sort_by_key(|f| path_to_slash(&f.rel));
    files
}

/// Relative slash-paths of included files, grouped by parent directory
/// slash-path (`""` for the root) and sorted within each group.
fn group_files_by_dir(scan: &ScanResult) -> BTreeMap<String, Vec<String>> {
    let mut by_dir: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for file in &scan.files {
        let parent = file
            .rel
            .parent()
            .map(path_to_slash)
            .unwrap_or_default();
        by_dir.entry(parent).or_default().push(path_to_slash(&file.rel));
    }
    for names in by_dir.values_mut() {
        names.sort();
    }
    by_dir
}

fn write_file_link(out: &mut String, rel: &str, indent: usize) {
    let name = rel.rsplit('/').next().unwrap_or(rel);
    out.push_str(&format!(
        "{}- 📄 [{}](#{})\n",
        "  ".repeat(indent),
        name,
        make_id(rel)
    ));
}

/// Directory-structure section: each directory's direct files come before
/// its subdirectories are recursed into.
fn write_md_tree(
    out: &mut String,
    node: &DirNode,
    prefix: &str,
    indent: usize,
    files_by_dir: &BTreeMap<String, Vec<String>>,
) {
    for (name, child) in &node.children {
        let TreeNode::Dir(dir) = child else { continue };
        let full = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        out.push_str(&format!("{}- 📁 **{}/**\n", "  ".repeat(indent), name));
        if let Some(names) = files_by_dir.get(&full) {
            for rel in names {
                write_file_link(out, rel, indent + 1);
            }
        }
        write_md_tree(out, dir, &full, indent + 1, files_by_dir);
    }
}

/// Line-drawing tree: directories sort before files at each level, both
/// alphabetical, directories suffixed with `/`.
fn write_text_tree(out: &mut String, node: &DirNode, prefix: &str) {
    let mut items: Vec<(&String, &TreeNode)> = node.children.iter().collect();
    items.sort_by_key(|(name, node)| (matches!(node, TreeNode::File), (*name).clone()));
    let count = items.len();
    for (i, (name, child)) in items.into_iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { "└── " } else { "├── " };
        match child {
            TreeNode::File => out.push_str(&format!("{}{}{}\n", prefix, branch, name)),
            TreeNode::Dir(dir) => {
                out.push_str(&format!("{}{}{}/\n", prefix, branch, name));
                let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
                write_text_tree(out, dir, &next);
            }
        }
    }
}

fn language_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "py" => "python", "js" => "javascript", "ts" => "typescript",
        "jsx" => "jsx", "tsx" => "tsx", "html" => "html", "css" => "css",
        "scss" => "scss", "sass" => "sass", "less" => "less",
        "cpp" => "cpp", "c" => "c", "h" => "c", "hpp" => "cpp",
        "java" => "java", "sh" => "bash", "bat" => "batch", "ps1" => "powershell",
        "json" => "json", "xml" => "xml", "yaml" | "yml" => "yaml",
        "md" => "markdown", "sql" => "sql", "rb" => "ruby", "go" => "go",
        "php" => "php", "cs" => "csharp", "swift" => "swift", "kt" => "kotlin",
        "rs" => "rust", "dart" => "dart", "lua" => "lua", "r" => "r",
        "pl" | "pm" => "perl", "scala" => "scala", "groovy" => "groovy",
        "coffee" => "coffeescript", "elm" => "elm", "erl" => "erlang",
        "hs" => "haskell", "ex" | "exs" => "elixir", "clj" => "clojure",
        "fs" | "fsx" => "fsharp", "cmake" => "cmake", "dockerfile" => "dockerfile",
        "tf" => "terraform", "vue" => "vue", "svelte" => "svelte",
        _ => "",
    }
}

/// The path the text variant is written to: `output` with its extension
/// replaced by `txt`.
pub fn raw_output_path(output: &Path) -> PathBuf {
    output.with_extension("txt")
}
