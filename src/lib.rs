//! # Codemapper
//!
//! `codemapper` recursively walks a directory tree, filters entries against
//! `.cmignore`-style glob patterns, and renders a single Markdown document
//! containing a linked table of contents plus the textual contents of every
//! included file. Binary files are detected by null-byte sniffing and listed
//! without their content; an optional plain-text variant can be written
//! alongside the Markdown output.
//!
//! The pipeline is a single synchronous pass: load the ignore config, scan
//! the tree, render. The pieces are exposed individually so they can be
//! driven against pre-built results in tests or other tools.
//!
//! # Example
//!
//! ```no_run
//! use codemapper::{MapBuilder, map_directory};
//!
//! let options = MapBuilder::new("./my-project")
//!     .output("codebase_map.md")
//!     .raw(true)
//!     .build();
//!
//! let summary = map_directory(&options).expect("failed to map directory");
//!
//! println!(
//!     "wrote {} ({} directories, {} files)",
//!     summary.output.display(),
//!     summary.dir_count,
//!     summary.file_count
//! );
//! ```

mod anchor;
mod detect;
mod engine;
mod error;
mod glob;
mod ignore;
mod options;
pub mod output;
mod tree;
mod types;

pub use anchor::{make_id, ANCHOR_PREFIX};
pub use detect::is_binary;
pub use engine::{map_directory, scan};
pub use error::MapError;
pub use glob::glob_match;
pub use ignore::{is_ignored, load_patterns, IgnorePattern, IGNORE_FILE_NAME};
pub use options::{MapBuilder, MapOptions};
pub use types::{FileEntry, MapSummary, ScanResult};
