//! Migration report output
//!
//! Report lines go to stdout; diagnostics go through tracing. Plain text
//! mirrors the dry-run/apply wording ("show" vs "migrate"); JSON mode emits
//! one object per line for scripting.

use std::path::Path;

use pxt_common::xmp::XmpRecord;
use serde::Serialize;

use crate::classify::MigrationOutcome;

/// One reportable sidecar pair
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    /// Capture One sidecar path
    pub target_path: &'a Path,

    /// darktable record
    pub source: &'a XmpRecord,

    /// Capture One record
    pub target: &'a XmpRecord,

    /// Classifier outcome
    pub outcome: MigrationOutcome,

    /// Whether the patch was written
    pub applied: bool,
}

impl ReportEntry<'_> {
    /// Plain text report line
    pub fn render_text(&self) -> String {
        let action = match self.outcome {
            MigrationOutcome::Conflict => "conflict",
            _ if self.applied => "migrate",
            _ => "show",
        };
        let merge = if self.outcome == MigrationOutcome::Merge {
            " (merge)"
        } else {
            ""
        };
        format!(
            "{}: {} - {} ({}){}",
            self.target_path.display(),
            self.source,
            self.target,
            action,
            merge
        )
    }
}

/// Emit one report line to stdout
pub fn emit(entry: &ReportEntry<'_>, json: bool) {
    if json {
        match serde_json::to_string(entry) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!("Failed to serialize report entry: {}", e),
        }
    } else {
        println!("{}", entry.render_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn record(rating: Option<i32>, keywords: &[&str]) -> XmpRecord {
        let keywords: BTreeSet<String> = keywords.iter().map(|s| s.to_string()).collect();
        XmpRecord::new(rating, keywords)
    }

    #[test]
    fn test_dry_run_line() {
        let source = record(Some(4), &["alps"]);
        let target = record(None, &[]);
        let entry = ReportEntry {
            target_path: Path::new("/photos/IMG_0001.xmp"),
            source: &source,
            target: &target,
            outcome: MigrationOutcome::Migrate,
            applied: false,
        };
        assert_eq!(
            entry.render_text(),
            "/photos/IMG_0001.xmp: rating=4 keywords={alps} - rating=none keywords={} (show)"
        );
    }

    #[test]
    fn test_applied_merge_line() {
        let source = record(Some(3), &["a"]);
        let target = record(None, &["b"]);
        let entry = ReportEntry {
            target_path: Path::new("/photos/IMG_0001.xmp"),
            source: &source,
            target: &target,
            outcome: MigrationOutcome::Merge,
            applied: true,
        };
        let line = entry.render_text();
        assert!(line.ends_with("(migrate) (merge)"), "got: {}", line);
    }

    #[test]
    fn test_conflict_line() {
        let source = record(Some(2), &[]);
        let target = record(Some(5), &[]);
        let entry = ReportEntry {
            target_path: Path::new("/photos/IMG_0001.xmp"),
            source: &source,
            target: &target,
            outcome: MigrationOutcome::Conflict,
            applied: false,
        };
        assert!(entry.render_text().ends_with("(conflict)"));
    }

    #[test]
    fn test_json_entry_shape() {
        let source = record(Some(4), &["alps"]);
        let target = record(None, &[]);
        let entry = ReportEntry {
            target_path: Path::new("/photos/IMG_0001.xmp"),
            source: &source,
            target: &target,
            outcome: MigrationOutcome::Migrate,
            applied: false,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""outcome":"migrate""#));
        assert!(json.contains(r#""applied":false"#));
        assert!(json.contains(r#""target_path":"/photos/IMG_0001.xmp""#));
    }
}
