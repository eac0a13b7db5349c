//! # PXT Common Library
//!
//! Shared code for the photo XMP toolkit binaries including:
//! - Directory scanning
//! - Sidecar path conventions (darktable / Capture One pairing)
//! - XMP record model and the two dialect extractors

pub mod scan;
pub mod sidecar;
pub mod xmp;

pub use scan::{FileScanner, ScanError};
pub use xmp::{SidecarError, XmpRecord};
