//! Migration classifier
//!
//! Compares a darktable record against its Capture One counterpart and
//! decides what, if anything, a migration has to do. Conflicts and merges
//! carry more information than a plain migration, so they are checked first
//! and never masked by the simpler outcomes.

use pxt_common::xmp::XmpRecord;
use serde::Serialize;

/// Migration decision for one sidecar pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// Target already has everything the source has
    NoAction,

    /// Target is missing data and a plain copy suffices
    Migrate,

    /// Both sides carry keywords; the union must be written
    Merge,

    /// Both sides carry a rating and they disagree
    Conflict,
}

impl MigrationOutcome {
    /// Report tag for this outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationOutcome::NoAction => "no_action",
            MigrationOutcome::Migrate => "migrate",
            MigrationOutcome::Merge => "merge",
            MigrationOutcome::Conflict => "conflict",
        }
    }

    /// True when the pair needs a write in apply mode
    pub fn requires_write(&self) -> bool {
        matches!(self, MigrationOutcome::Migrate | MigrationOutcome::Merge)
    }
}

/// Classify one (source, target) sidecar pair
///
/// Deterministic and total; the first matching rule wins:
/// 1. ratings present on both sides and unequal: Conflict
/// 2. source keywords missing from the target: Merge when the target has
///    keywords of its own, Migrate when it has none
/// 3. source rating present, target rating absent: Migrate
/// 4. otherwise: NoAction
///
/// A rating-only difference never produces Merge; that outcome is reserved
/// for the keyword union case.
pub fn classify(source: &XmpRecord, target: &XmpRecord) -> MigrationOutcome {
    if let (Some(source_rating), Some(target_rating)) = (source.rating, target.rating) {
        if source_rating != target_rating {
            return MigrationOutcome::Conflict;
        }
    }

    if source.keywords_missing_from(target).next().is_some() {
        return if target.keywords.is_empty() {
            MigrationOutcome::Migrate
        } else {
            MigrationOutcome::Merge
        };
    }

    if source.rating.is_some() && target.rating.is_none() {
        return MigrationOutcome::Migrate;
    }

    MigrationOutcome::NoAction
}
