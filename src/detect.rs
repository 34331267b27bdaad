//! Binary file detection by null-byte sniffing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// How many leading bytes are inspected.
const SNIFF_LEN: u64 = 4096;

/// Returns true when `path` looks like a binary file.
///
/// Only the first 4096 bytes are read; a NUL byte anywhere in that prefix
/// classifies the file as binary. A file that cannot be opened or read is
/// reported as binary, so its content is skipped while the entry itself
/// still appears in the document.
pub fn is_binary(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return true,
    };
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    if BufReader::new(file)
        .take(SNIFF_LEN)
        .read_to_end(&mut prefix)
        .is_err()
    {
        return true;
    }
    prefix.contains(&0)
}
