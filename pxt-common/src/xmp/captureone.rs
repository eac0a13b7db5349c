//! Capture One sidecar extractor
//!
//! Capture One stores the star rating as a child `xmp:Rating` element of the
//! `rdf:Description` node and omits the element entirely for unrated photos,
//! so an absent element is a valid "unset" state. No sentinel remapping
//! applies to this dialect.

use std::fs;
use std::path::Path;

use roxmltree::Document;

use super::{description, read_keywords, SidecarError, XmpRecord, XMP_NS};

/// Read and parse a Capture One sidecar file
pub fn read(path: &Path) -> Result<XmpRecord, SidecarError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parse Capture One sidecar text
pub fn parse(text: &str) -> Result<XmpRecord, SidecarError> {
    let doc = Document::parse(text)?;
    let desc = description(&doc)?;

    let rating = match desc
        .children()
        .find(|n| n.has_tag_name((XMP_NS, "Rating")))
    {
        Some(node) => {
            let raw = node.text().unwrap_or("");
            let value: i32 = raw.trim().parse().map_err(|_| {
                SidecarError::InvalidRating(format!("unparsable xmp:Rating element: {:?}", raw))
            })?;
            Some(value)
        }
        None => None,
    };

    let keywords = read_keywords(&desc)?;

    Ok(XmpRecord::new(rating, keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDECAR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/" x:xmptk="Capture One 23 Windows">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
    xmlns:xmp="http://ns.adobe.com/xap/1.0/"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:photoshop="http://ns.adobe.com/photoshop/1.0/">
   <photoshop:ColorMode>3</photoshop:ColorMode>
   <xmp:Rating>5</xmp:Rating>
   <dc:subject>
    <rdf:Bag>
     <rdf:li>boats</rdf:li>
    </rdf:Bag>
   </dc:subject>
  </rdf:Description>
 </rdf:RDF>
</x:xmpmeta>
"#;

    #[test]
    fn test_parse_rating_and_keywords() {
        let record = parse(SIDECAR).unwrap();
        assert_eq!(record.rating, Some(5));
        let keywords: Vec<&String> = record.keywords.iter().collect();
        assert_eq!(keywords, vec!["boats"]);
    }

    #[test]
    fn test_missing_rating_element_means_unset() {
        let text = SIDECAR.replace("   <xmp:Rating>5</xmp:Rating>\n", "");
        let record = parse(&text).unwrap();
        assert_eq!(record.rating, None);
    }

    #[test]
    fn test_unparsable_rating_is_hard_failure() {
        let text = SIDECAR.replace(
            "<xmp:Rating>5</xmp:Rating>",
            "<xmp:Rating>five</xmp:Rating>",
        );
        match parse(&text).unwrap_err() {
            SidecarError::InvalidRating(_) => {}
            other => panic!("Expected InvalidRating, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_rating_element_is_hard_failure() {
        let text = SIDECAR.replace(
            "<xmp:Rating>5</xmp:Rating>",
            "<xmp:Rating></xmp:Rating>",
        );
        match parse(&text).unwrap_err() {
            SidecarError::InvalidRating(_) => {}
            other => panic!("Expected InvalidRating, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subject_means_empty_keywords() {
        let start = SIDECAR.find("   <dc:subject>").unwrap();
        let end = SIDECAR.find("</dc:subject>").unwrap() + "</dc:subject>\n".len();
        let text = format!("{}{}", &SIDECAR[..start], &SIDECAR[end..]);
        let record = parse(&text).unwrap();
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn test_missing_description_is_hard_failure() {
        match parse("<root/>").unwrap_err() {
            SidecarError::MissingDescription => {}
            other => panic!("Expected MissingDescription, got {:?}", other),
        }
    }
}
