//! Sidecar path conventions
//!
//! darktable writes its sidecar next to the raw file as `IMG.ARW.xmp`;
//! Capture One writes `IMG.xmp` for the same photo. Everything here is pure
//! path arithmetic, no filesystem access.

use std::path::{Path, PathBuf};

/// Extension of the raw photo files the toolkit manages
pub const RAW_EXTENSION: &str = "ARW";

/// True for darktable sidecars of raw photos (`*.ARW.xmp`, any case)
pub fn is_raw_sidecar(path: &Path) -> bool {
    has_suffix(path, ".arw.xmp")
}

/// True for any XMP sidecar (`*.xmp`, any case)
pub fn is_sidecar(path: &Path) -> bool {
    has_suffix(path, ".xmp")
}

/// True for raw photo files (`*.arw`, any case)
pub fn is_raw_photo(path: &Path) -> bool {
    has_suffix(path, ".arw")
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase().ends_with(suffix))
        .unwrap_or(false)
}

/// Capture One sidecar for a darktable sidecar: `IMG.ARW.xmp` to `IMG.xmp`
pub fn counterpart_path(raw_sidecar: &Path) -> PathBuf {
    raw_sidecar.with_extension("").with_extension("xmp")
}

/// Raw photo for a Capture One sidecar: `IMG.xmp` to `IMG.ARW`
pub fn photo_path(sidecar: &Path) -> PathBuf {
    sidecar.with_extension(RAW_EXTENSION)
}

/// `.moff` companion for a darktable sidecar: `IMG.ARW.xmp` to `IMG.ARW.moff`
pub fn moff_path(raw_sidecar: &Path) -> PathBuf {
    raw_sidecar.with_extension("moff")
}

/// File a sidecar was derived from: `IMG.ARW.xmp` to `IMG.ARW`
///
/// For a single-extension sidecar (`IMG.xmp`) this yields a path with no
/// extension left, which callers treat as "cannot be judged".
pub fn derived_from_path(sidecar: &Path) -> PathBuf {
    sidecar.with_extension("")
}

/// JPEG sibling of a raw photo: `IMG.ARW` to `IMG.jpg`
pub fn jpeg_sibling(raw_photo: &Path) -> PathBuf {
    raw_photo.with_extension("jpg")
}
