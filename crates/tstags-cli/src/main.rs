//! tstags CLI
//!
//! Command-line interface for generating ctags-compatible index files from
//! TypeScript sources.

mod walker;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use tstags_indexer::{
    extract, supported_kinds, ExtractOptions, ScriptTarget, SourceTree, TagFile, TriviaScanner,
};
use walker::Walker;

#[derive(Parser)]
#[command(name = "tstags")]
#[command(about = "Generate a ctags-compatible tags file for TypeScript sources")]
#[command(version)]
struct Cli {
    /// Input files (directories with --recursive)
    #[arg(value_name = "FILE", required_unless_present = "list_kinds")]
    files: Vec<PathBuf>,

    /// Write output to the specified file ("-" writes to standard out)
    #[arg(short, long, default_value = "tags")]
    file: PathBuf,

    /// Recurse into directories in the file list
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Include only the selected kind codes (e.g. "fC")
    #[arg(long, value_name = "CODES")]
    fields: Option<String>,

    /// List supported tag kinds and exit
    #[arg(long)]
    list_kinds: bool,

    /// Sort tags by name
    #[arg(long)]
    sort: bool,

    /// Targeting language version
    #[arg(long, default_value = "ES6")]
    target: String,

    /// Emit file paths as given instead of resolved absolute paths
    #[arg(long)]
    tag_relative: bool,
}

fn main() -> Result<()> {
    // Simple logging for CLI
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_target(false).init();
    }

    let cli = Cli::parse();

    if cli.list_kinds {
        for line in supported_kinds() {
            println!("{line}");
        }
        return Ok(());
    }

    // Configuration errors surface before any file is touched
    let target: ScriptTarget = cli.target.parse()?;
    let options = ExtractOptions {
        kinds: cli.fields.as_ref().map(|codes| codes.chars().collect()),
        tag_relative: cli.tag_relative,
        target,
    };

    let files = collect_input_files(&cli.files, cli.recursive)?;
    debug!(count = files.len(), "input files resolved");

    let mut tags = TagFile::new(cli.sort);
    for path in &files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let tree = SourceTree::parse(&source, path, target)?;
        let mut scanner = TriviaScanner::new(&source);
        let path_str = path.to_string_lossy();
        extract(
            &tree.root(&source),
            &source,
            &path_str,
            &mut scanner,
            &options,
            &mut tags,
        )?;
    }

    if tags.is_empty() {
        info!("no declarations found; nothing to write");
        return Ok(());
    }

    info!(entries = tags.len(), files = files.len(), "serializing tags");
    let output = tags.serialize();

    if cli.file == Path::new("-") {
        println!("{output}");
    } else {
        fs::write(&cli.file, output)
            .with_context(|| format!("failed to write {}", cli.file.display()))?;
    }

    Ok(())
}

/// Resolve the input file list. With `recursive` set, each argument is
/// treated as a directory to walk for `.ts` files; otherwise arguments are
/// used as given, in order.
fn collect_input_files(args: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    if !recursive {
        return Ok(args.to_vec());
    }

    let mut files = Vec::new();
    for dir in args {
        files.extend(Walker::new(dir).walk()?);
    }
    Ok(files)
}
