//! XMP sidecar metadata model and dialect extractors
//!
//! darktable and Capture One encode the same logical attributes differently:
//! darktable stores the star rating as an attribute on the `rdf:Description`
//! node, Capture One as a child element. Both store keywords in a
//! `dc:subject` bag. The extractors normalize both encodings into
//! [`XmpRecord`] so nothing downstream has to know which tool wrote a file.

pub mod captureone;
pub mod darktable;

use std::collections::BTreeSet;
use std::fmt;

use roxmltree::{Document, Node};
use serde::Serialize;
use thiserror::Error;

/// Adobe XMP basic namespace
pub const XMP_NS: &str = "http://ns.adobe.com/xap/1.0/";

/// Dublin Core namespace
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// RDF syntax namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Sidecar extraction errors
#[derive(Debug, Error)]
pub enum SidecarError {
    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Document has no rdf:Description node
    #[error("missing rdf:Description element")]
    MissingDescription,

    /// Rating missing where the dialect requires one, or unparsable
    #[error("invalid rating: {0}")]
    InvalidRating(String),

    /// dc:subject present but without the contained keyword bag
    #[error("malformed keyword list: {0}")]
    MalformedKeywords(String),
}

/// Normalized sidecar metadata
///
/// Immutable once constructed. An absent rating means the tool recorded no
/// rating; dialect-specific "unset" sentinels are already normalized away by
/// the extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XmpRecord {
    /// Star rating, -1..=5, None when unset
    pub rating: Option<i32>,

    /// Keyword tags, deduplicated, deterministically ordered
    pub keywords: BTreeSet<String>,
}

impl XmpRecord {
    /// Create a record from already-normalized parts
    pub fn new(rating: Option<i32>, keywords: BTreeSet<String>) -> Self {
        Self { rating, keywords }
    }

    /// Keywords present here but absent from `other`
    pub fn keywords_missing_from<'a>(
        &'a self,
        other: &'a XmpRecord,
    ) -> impl Iterator<Item = &'a String> {
        self.keywords.difference(&other.keywords)
    }
}

impl fmt::Display for XmpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating {
            Some(rating) => write!(f, "rating={}", rating)?,
            None => write!(f, "rating=none")?,
        }
        write!(f, " keywords={{")?;
        for (i, keyword) in self.keywords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", keyword)?;
        }
        write!(f, "}}")
    }
}

/// Locate the rdf:Description node of a sidecar document
pub(crate) fn description<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<Node<'a, 'input>, SidecarError> {
    doc.descendants()
        .find(|n| n.has_tag_name((RDF_NS, "Description")))
        .ok_or(SidecarError::MissingDescription)
}

/// Read the dc:subject keyword bag of a description node
///
/// An absent dc:subject means no keywords; a dc:subject without a contained
/// rdf:Bag / rdf:Seq is malformed.
pub(crate) fn read_keywords(description: &Node<'_, '_>) -> Result<BTreeSet<String>, SidecarError> {
    let Some(subject) = description
        .children()
        .find(|n| n.has_tag_name((DC_NS, "subject")))
    else {
        return Ok(BTreeSet::new());
    };

    let bag = subject.children().find(|n| n.is_element()).ok_or_else(|| {
        SidecarError::MalformedKeywords("dc:subject has no keyword bag".to_string())
    })?;

    Ok(bag
        .children()
        .filter(|n| n.has_tag_name((RDF_NS, "li")))
        .filter_map(|n| n.text())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rating: Option<i32>, keywords: &[&str]) -> XmpRecord {
        XmpRecord::new(rating, keywords.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_display_with_rating_and_keywords() {
        let r = record(Some(4), &["holiday", "alps"]);
        assert_eq!(r.to_string(), "rating=4 keywords={alps, holiday}");
    }

    #[test]
    fn test_display_unset() {
        let r = record(None, &[]);
        assert_eq!(r.to_string(), "rating=none keywords={}");
    }

    #[test]
    fn test_keywords_missing_from() {
        let a = record(None, &["a", "b"]);
        let b = record(None, &["b", "c"]);
        let missing: Vec<&String> = a.keywords_missing_from(&b).collect();
        assert_eq!(missing, vec!["a"]);
        assert!(b.keywords_missing_from(&b).next().is_none());
    }
}
