//! pxt-orphans - orphan sidecar removal
//!
//! Deletes XMP sidecar files whose derived-from photo no longer exists.
//! Dry run by default; `--delete` removes the files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pxt_prune::{orphans, PruneOptions};

/// Delete orphan XMP sidecar files
#[derive(Parser, Debug)]
#[clap(name = "pxt-orphans")]
#[clap(about = "Delete XMP sidecar files whose photo no longer exists")]
struct Args {
    /// Root directory to work on
    path: PathBuf,

    /// Traverse directories recursively
    #[clap(long)]
    recursive: bool,

    /// Delete the sidecar files (default: show only)
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
    let summary = orphans::prune(&args.path, options)?;

    info!(
        examined = summary.examined,
        matched = summary.matched,
        failed = summary.failed,
        "Orphan sidecar run complete"
    );

    Ok(())
}
