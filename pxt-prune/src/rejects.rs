//! Rejected photo removal
//!
//! darktable marks rejected photos with a negative rating. For each
//! rejected photo the raw file and every companion (darktable sidecar,
//! Capture One sidecar, `.moff`) are removed together so no orphans are
//! left behind.

use std::fs;
use std::path::Path;

use pxt_common::scan::FileScanner;
use pxt_common::sidecar;
use pxt_common::xmp::darktable;

use crate::{PruneError, PruneOptions, PruneSummary};

/// Remove or report photos rejected in darktable below `root`
pub fn prune(root: &Path, options: PruneOptions) -> Result<PruneSummary, PruneError> {
    let scanner = FileScanner::new(options.recursive);
    let mut summary = PruneSummary::default();

    for dt_path in scanner.scan(root)? {
        if !sidecar::is_raw_sidecar(&dt_path) {
            continue;
        }
        summary.examined += 1;

        let record = match darktable::read(&dt_path) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", dt_path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        let rejected = matches!(record.rating, Some(rating) if rating < 0);
        if !rejected {
            continue;
        }

        let c1_path = sidecar::counterpart_path(&dt_path);
        let photo = sidecar::photo_path(&c1_path);

        if options.delete {
            match delete_rejected(&dt_path, &c1_path, &photo) {
                Ok(()) => {
                    println!("{} (delete)", photo.display());
                    summary.matched += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to delete {}: {}", photo.display(), e);
                    summary.failed += 1;
                }
            }
        } else {
            println!("{} (show)", photo.display());
            summary.matched += 1;
        }
    }

    Ok(summary)
}

/// Delete the darktable sidecar and every companion file that exists
fn delete_rejected(dt_path: &Path, c1_path: &Path, photo: &Path) -> std::io::Result<()> {
    fs::remove_file(dt_path)?;

    let moff = sidecar::moff_path(dt_path);
    for companion in [moff.as_path(), c1_path, photo] {
        if companion.exists() {
            fs::remove_file(companion)?;
        }
    }

    Ok(())
}
