//! pxt-rejects - rejected photo removal
//!
//! Deletes photos that carry a negative rating in their darktable sidecar,
//! together with every companion file. Dry run by default; `--delete`
//! removes the files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pxt_prune::{rejects, PruneOptions};

/// Delete photos rejected in darktable
#[derive(Parser, Debug)]
#[clap(name = "pxt-rejects")]
#[clap(about = "Delete photos with a negative darktable rating, including their sidecar files")]
struct Args {
    /// Root directory to work on
    path: PathBuf,

    /// Traverse directories recursively
    #[clap(long)]
    recursive: bool,

    /// Delete the photos (default: show only)
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
    let summary = rejects::prune(&args.path, options)?;

    info!(
        examined = summary.examined,
        matched = summary.matched,
        failed = summary.failed,
        "Rejected photo run complete"
    );

    Ok(())
}
