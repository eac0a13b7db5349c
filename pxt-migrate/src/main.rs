//! pxt-migrate - darktable to Capture One sidecar migration
//!
//! Scans a photo tree for darktable sidecars (`*.ARW.xmp`), pairs each with
//! its Capture One sidecar (`*.xmp`), and migrates missing rating and
//! keyword data into the Capture One file. Dry run by default; `--migrate`
//! writes the changes.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pxt_migrate::processor::{run, RunOptions};

/// darktable to Capture One sidecar migration
#[derive(Parser, Debug)]
#[clap(name = "pxt-migrate")]
#[clap(about = "Migrate rating and keyword data from darktable sidecars to Capture One sidecars")]
struct Args {
    /// Root directory to work on
    path: PathBuf,

    /// Traverse directories recursively
    #[clap(long)]
    recursive: bool,

    /// Write the migrated data to the Capture One sidecars (default: show only)
    #[clap(long)]
    migrate: bool,

    /// Emit one JSON object per reported pair
    #[clap(long)]
    json: bool,
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

    let options = RunOptions {
        recursive: args.recursive,
        apply: args.migrate,
        json: args.json,
    };

    let summary = run(&args.path, options)?;

    info!(
        scanned = summary.scanned,
        unchanged = summary.unchanged,
        migrated = summary.migrated,
        merged = summary.merged,
        conflicts = summary.conflicts,
        missing_counterpart = summary.missing_counterpart,
        failed = summary.failed,
        "Migration run complete"
    );

    Ok(())
}
