//! Command-line interface for codemapper.
//!
//! Maps a directory into a single Markdown document: a linked directory
//! structure followed by the contents of every included file.

use clap::Parser;
use codemapper::{map_directory, MapBuilder};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// codemapper — snapshot a codebase into one shareable document
#[derive(Parser)]
#[command(name = "codemapper", version, about, long_about = None)]
struct Cli {
    /// Directory to map (default: current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output document path
    #[arg(default_value = "codebase_map.md")]
    output: PathBuf,

    /// Ignore file to use instead of autodetecting .cmignore
    ignore_file: Option<PathBuf>,

    /// Also generate a raw text version alongside the Markdown output
    #[arg(long)]
    raw: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("Mapping directory: {}", cli.root.display());

    let options = MapBuilder::new(cli.root)
        .output(cli.output)
        .ignore_file(cli.ignore_file)
        .raw(cli.raw)
        .build();

    match map_directory(&options) {
        Ok(summary) => {
            println!(
                "Directory mapping complete. Output saved to: {}",
                summary.output.display()
            );
            println!(
                "Found {} directories and {} files.",
                summary.dir_count, summary.file_count
            );
            if let Some(raw) = summary.raw_output {
                println!("Raw text version saved to: {}", raw.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
