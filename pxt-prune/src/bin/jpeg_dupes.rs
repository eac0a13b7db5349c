//! pxt-jpeg-dupes - JPEG duplicate removal
//!
//! Deletes JPEG files that duplicate a raw file of the same stem.
//! Dry run by default; `--delete` removes the files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pxt_prune::{jpeg, PruneOptions};

/// Delete JPEG files when the equivalent raw file exists
#[derive(Parser, Debug)]
#[clap(name = "pxt-jpeg-dupes")]
#[clap(about = "Delete JPEG files when the equivalent raw file exists")]
struct Args {
    /// Root directory to work on
    path: PathBuf,

    /// Traverse directories recursively
    #[clap(long)]
    recursive: bool,

    /// Delete the JPEG files (default: show only)
    #[clap(long)]
    delete: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let options = PruneOptions {
        recursive: args.recursive,
        delete: args.delete,
    };
    let summary = jpeg::prune(&args.path, options)?;

    info!(
        examined = summary.examined,
        matched = summary.matched,
        failed = summary.failed,
        "JPEG duplicate run complete"
    );

    Ok(())
}
