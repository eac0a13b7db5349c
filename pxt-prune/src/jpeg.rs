//! JPEG duplicate removal
//!
//! Cameras shooting raw+JPEG leave a `.jpg` sibling next to every raw file.
//! Once the raw is kept the JPEG is redundant and can go.

use std::path::Path;

use pxt_common::scan::FileScanner;
use pxt_common::sidecar;

use crate::{remove_or_show, PruneError, PruneOptions, PruneSummary};

/// Remove or report JPEG siblings of raw files below `root`
pub fn prune(root: &Path, options: PruneOptions) -> Result<PruneSummary, PruneError> {
    let scanner = FileScanner::new(options.recursive);
    let mut summary = PruneSummary::default();

    for path in scanner.scan(root)? {
        if !sidecar::is_raw_photo(&path) {
            continue;
        }
        summary.examined += 1;

        let jpeg = sidecar::jpeg_sibling(&path);
        if !jpeg.exists() {
            continue;
        }

        remove_or_show(&jpeg, options.delete, &mut summary);
    }

    Ok(summary)
}
