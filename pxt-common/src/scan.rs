//! Photo directory scanner
//!
//! Walks a photo tree and yields candidate files for the toolkit binaries.
//! Traversal is a single pass, bounded to the immediate directory unless the
//! recursive flag is set.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Scanner errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified root does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Root exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Directory scanner for photo trees
pub struct FileScanner {
    recursive: bool,
    ignore_patterns: Vec<String>,
}

impl FileScanner {
    /// Create a scanner with default ignore patterns
    ///
    /// Ignores OS junk files like .DS_Store and Thumbs.db.
    pub fn new(recursive: bool) -> Self {
        Self {
            recursive,
            ignore_patterns: vec![".DS_Store".to_string(), "Thumbs.db".to_string()],
        }
    }

    /// Scan the root directory for files
    ///
    /// Results are sorted by file name for reproducible runs. Entries that
    /// cannot be read are logged and skipped; only a missing or
    /// non-directory root aborts the scan.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root.exists() {
            return Err(ScanError::PathNotFound(root.to_path_buf()));
        }

        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Error accessing entry: {}", e);
                    // Continue scanning, don't abort
                }
            }
        }

        Ok(files)
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        let file_name = entry.file_name().to_string_lossy();
        self.ignore_patterns.iter().any(|p| file_name.as_ref() == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_nonexistent_path() {
        let scanner = FileScanner::new(false);
        let result = scanner.scan(Path::new("/nonexistent/path"));
        match result.unwrap_err() {
            ScanError::PathNotFound(_) => {}
            other => panic!("Expected PathNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_file_as_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("photo.xmp");
        fs::write(&file, "x").unwrap();

        let scanner = FileScanner::new(false);
        match scanner.scan(&file).unwrap_err() {
            ScanError::NotADirectory(_) => {}
            other => panic!("Expected NotADirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_is_shallow_by_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.xmp"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.xmp"), "x").unwrap();

        let scanner = FileScanner::new(false);
        let files = scanner.scan(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.xmp"));
    }

    #[test]
    fn test_scan_recursive_descends() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.xmp"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.xmp"), "x").unwrap();

        let scanner = FileScanner::new(true);
        let files = scanner.scan(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_scan_skips_junk_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".DS_Store"), "x").unwrap();
        fs::write(dir.path().join("photo.xmp"), "x").unwrap();

        let scanner = FileScanner::new(false);
        let files = scanner.scan(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("photo.xmp"));
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.xmp"), "x").unwrap();
        fs::write(dir.path().join("a.xmp"), "x").unwrap();
        fs::write(dir.path().join("c.xmp"), "x").unwrap();

        let scanner = FileScanner::new(false);
        let first = scanner.scan(dir.path()).unwrap();
        let second = scanner.scan(dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(first[0].ends_with("a.xmp"));
        assert!(first[2].ends_with("c.xmp"));
    }
}
