//! darktable sidecar extractor
//!
//! darktable stores the star rating as an `xmp:Rating` attribute on the
//! `rdf:Description` node and always writes one, so a missing attribute is a
//! hard failure. The value 1 is what darktable records for photos that were
//! never rated and is normalized to "unset" here; a genuine one-star rating
//! is indistinguishable from that default (assumption carried over from the
//! darktable sidecar format, to be confirmed against its schema).

use std::fs;
use std::path::Path;

use roxmltree::Document;

use super::{description, read_keywords, SidecarError, XmpRecord, XMP_NS};

/// Rating value darktable writes for photos that were never rated
pub const UNSET_RATING: i32 = 1;

/// Read and parse a darktable sidecar file
pub fn read(path: &Path) -> Result<XmpRecord, SidecarError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parse darktable sidecar text
pub fn parse(text: &str) -> Result<XmpRecord, SidecarError> {
    let doc = Document::parse(text)?;
    let desc = description(&doc)?;

    let raw = desc.attribute((XMP_NS, "Rating")).ok_or_else(|| {
        SidecarError::InvalidRating("missing xmp:Rating attribute".to_string())
    })?;
    let value: i32 = raw.trim().parse().map_err(|_| {
        SidecarError::InvalidRating(format!("unparsable xmp:Rating attribute: {:?}", raw))
    })?;
    let rating = (value != UNSET_RATING).then_some(value);

    let keywords = read_keywords(&desc)?;

    Ok(XmpRecord::new(rating, keywords))
}
