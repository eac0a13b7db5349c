//! Orphan sidecar removal
//!
//! A sidecar is orphaned when the file it was derived from no longer
//! exists. Sidecars whose derived path has no extension left (`IMG.xmp`
//! gives plain `IMG`) cannot be judged and are left alone.

use std::path::Path;

use pxt_common::scan::FileScanner;
use pxt_common::sidecar;

use crate::{remove_or_show, PruneError, PruneOptions, PruneSummary};

/// Remove or report orphaned XMP sidecars below `root`
pub fn prune(root: &Path, options: PruneOptions) -> Result<PruneSummary, PruneError> {
    let scanner = FileScanner::new(options.recursive);
    let mut summary = PruneSummary::default();

    for path in scanner.scan(root)? {
        if !sidecar::is_sidecar(&path) {
            continue;
        }
        summary.examined += 1;

        let derived_from = sidecar::derived_from_path(&path);
        if derived_from.extension().is_none() || derived_from.exists() {
            continue;
        }

        remove_or_show(&path, options.delete, &mut summary);
    }

    Ok(summary)
}
