//! Anchor identifiers for cross-references inside the rendered document.

/// Every anchor starts with this tag so generated ids never collide with
/// other anchors a Markdown viewer might synthesize from headings.
pub const ANCHOR_PREFIX: &str = "file_";

/// Characters that are rewritten to `_`. Everything else, including `<`, `>`,
/// `?` and `-`, passes through untouched.
const REPLACED: &[char] = &[
    '/', '\\', '.', ' ', '(', ')', '[', ']', '{', '}', ':', ';', ',', '\'', '"', '`', '!', '@',
    '#', '$', '%', '^', '&', '*', '+', '=', '|', '~',
];

/// Derives a stable anchor id from a relative file path.
///
/// The result is deterministic and lower-cased. Lower-casing means two paths
/// that differ only by case map to the same anchor; that collision is accepted
/// and the document will simply carry duplicate anchors for such trees.
pub fn make_id(rel_path: &str) -> String {
    let safe: String = rel_path
        .chars()
        .map(|c| if REPLACED.contains(&c) { '_' } else { c })
        .collect();
    format!("{}{}", ANCHOR_PREFIX, safe.to_lowercase())
}
