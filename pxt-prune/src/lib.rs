//! pxt-prune library interface
//!
//! Cleanup tools for photo trees: orphaned sidecars, JPEG duplicates of raw
//! files, and photos rejected in darktable. All tools default to a dry run
//! that only reports what would be deleted.

pub mod jpeg;
pub mod orphans;
pub mod rejects;

use std::path::Path;

use pxt_common::scan::ScanError;
use pxt_common::xmp::SidecarError;
use thiserror::Error;

/// Pruning errors
#[derive(Debug, Error)]
pub enum PruneError {
    /// Root directory could not be scanned
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Sidecar could not be parsed
    #[error(transparent)]
    Sidecar(#[from] SidecarError),

    /// File could not be deleted
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared options for the pruning binaries
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneOptions {
    /// Recurse into subdirectories
    pub recursive: bool,

    /// Delete matching files; default is a dry run
    pub delete: bool,
}

/// Counters for one pruning run
#[derive(Debug, Default, Clone)]
pub struct PruneSummary {
    /// Candidate files examined
    pub examined: usize,

    /// Files flagged (dry run) or deleted
    pub matched: usize,

    /// Files skipped on error
    pub failed: usize,
}

/// Delete `path` or report it, depending on mode
///
/// One line per match goes to stdout, mirroring the dry-run/apply wording.
pub(crate) fn remove_or_show(path: &Path, delete: bool, summary: &mut PruneSummary) {
    if delete {
        match std::fs::remove_file(path) {
            Ok(()) => {
                println!("{} (delete)", path.display());
                summary.matched += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to delete {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    } else {
        println!("{} (show)", path.display());
        summary.matched += 1;
    }
}
