//! Per-pair migration processing
//!
//! Discovers darktable sidecars, pairs each with its Capture One
//! counterpart, classifies the pair, and in apply mode rewrites the
//! counterpart. Pairs are processed independently and sequentially; a
//! failing pair is logged and counted, never fatal. Each target file is
//! read once and written at most once.

use std::fs;
use std::path::Path;

use pxt_common::scan::{FileScanner, ScanError};
use pxt_common::sidecar;
use pxt_common::xmp::{captureone, darktable, SidecarError};
use serde::Serialize;
use thiserror::Error;

use crate::classify::{classify, MigrationOutcome};
use crate::patch::{patch, PatchError};
use crate::report::{self, ReportEntry};

/// Per-pair migration errors
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Sidecar could not be parsed
    #[error(transparent)]
    Sidecar(#[from] SidecarError),

    /// Target document could not be patched
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// Target file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Recurse into subdirectories
    pub recursive: bool,

    /// Write changes; default is a dry run
    pub apply: bool,

    /// Emit JSON report lines instead of plain text
    pub json: bool,
}

/// Counters for one migration run
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunSummary {
    /// darktable sidecars found
    pub scanned: usize,

    /// Pairs needing no migration
    pub unchanged: usize,

    /// Plain migrations (applied or shown)
    pub migrated: usize,

    /// Keyword merges (applied or shown)
    pub merged: usize,

    /// Rating conflicts
    pub conflicts: usize,

    /// Sidecars without a Capture One counterpart
    pub missing_counterpart: usize,

    /// Pairs skipped on error
    pub failed: usize,
}

/// Migrate all darktable sidecars below `root`
///
/// Only a missing or unreadable root aborts the run; everything else is
/// reported per pair and the run continues.
pub fn run(root: &Path, options: RunOptions) -> Result<RunSummary, ScanError> {
    let scanner = FileScanner::new(options.recursive);
    let mut summary = RunSummary::default();

    for path in scanner.scan(root)? {
        if !sidecar::is_raw_sidecar(&path) {
            continue;
        }
        summary.scanned += 1;

        match process_pair(&path, options) {
            Ok(Some(outcome)) => match outcome {
                MigrationOutcome::NoAction => summary.unchanged += 1,
                MigrationOutcome::Migrate => summary.migrated += 1,
                MigrationOutcome::Merge => summary.merged += 1,
                MigrationOutcome::Conflict => summary.conflicts += 1,
            },
            Ok(None) => summary.missing_counterpart += 1,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Process one darktable sidecar
///
/// Returns None when the Capture One counterpart is missing. A pair whose
/// outcome is NoAction produces no report line.
fn process_pair(
    dt_path: &Path,
    options: RunOptions,
) -> Result<Option<MigrationOutcome>, MigrateError> {
    let c1_path = sidecar::counterpart_path(dt_path);
    if !c1_path.exists() {
        tracing::warn!("Capture One sidecar does not exist: {}", c1_path.display());
        return Ok(None);
    }

    let source = darktable::read(dt_path)?;
    let target_text = fs::read_to_string(&c1_path)?;
    let target = captureone::parse(&target_text)?;

    let outcome = classify(&source, &target);

    let applied = if outcome.requires_write() && options.apply {
        let patched = patch(&source, &target, &target_text)?;
        fs::write(&c1_path, patched)?;
        tracing::debug!(
            path = %c1_path.display(),
            outcome = outcome.as_str(),
            "Rewrote Capture One sidecar"
        );
        true
    } else {
        false
    };

    if outcome != MigrationOutcome::NoAction {
        let entry = ReportEntry {
            target_path: &c1_path,
            source: &source,
            target: &target,
            outcome,
            applied,
        };
        report::emit(&entry, options.json);
    }

    Ok(Some(outcome))
}
