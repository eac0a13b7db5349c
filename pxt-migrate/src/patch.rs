//! Target sidecar patch engine
//!
//! Edits the Capture One document as an ordered sequence of text lines
//! rather than through an XML writer; only the rating line and the keyword
//! block are touched, every other line is carried over verbatim. Insertions
//! and deletions are bounded by the marker lines of the Capture One dialect.

use std::collections::BTreeSet;

use pxt_common::xmp::XmpRecord;
use thiserror::Error;

/// Line that closes the rdf:Description block in a Capture One sidecar
const DESCRIPTION_END: &str = "  </rdf:Description>";

/// Opening marker of an existing keyword block
const SUBJECT_OPEN: &str = "   <dc:subject>";

/// Closing marker of an existing keyword block
const SUBJECT_CLOSE: &str = "   </dc:subject>";

/// Patch failures; the target file is left untouched in all cases
#[derive(Debug, Error)]
pub enum PatchError {
    /// Closing line of the rdf:Description block not found
    #[error("target document has no rdf:Description closing line")]
    DescriptionEndNotFound,

    /// Keyword block opens but never closes
    #[error("target document has an unterminated dc:subject block")]
    UnterminatedKeywordBlock,
}

/// Build the patched target document text
///
/// Applies the rating splice and the keyword splice, each skipped when its
/// precondition does not hold. The returned text is complete; the caller
/// performs the single write. The final-newline state of the input is
/// preserved.
pub fn patch(
    source: &XmpRecord,
    target: &XmpRecord,
    target_text: &str,
) -> Result<String, PatchError> {
    let mut lines: Vec<String> = target_text.lines().map(str::to_string).collect();

    splice_rating(source, target, &mut lines)?;
    splice_keywords(source, target, &mut lines)?;

    let mut patched = lines.join("\n");
    if target_text.ends_with('\n') {
        patched.push('\n');
    }
    Ok(patched)
}

/// Insert the source rating before the description closing line
///
/// Skipped when the source has no rating or the target already has one. An
/// existing rating line is never rewritten, conflicting or not.
fn splice_rating(
    source: &XmpRecord,
    target: &XmpRecord,
    lines: &mut Vec<String>,
) -> Result<(), PatchError> {
    let Some(rating) = source.rating else {
        return Ok(());
    };
    if target.rating.is_some() {
        return Ok(());
    }

    let insert_at = description_end(lines)?;
    lines.insert(insert_at, format!("   <xmp:Rating>{}</xmp:Rating>", rating));
    Ok(())
}

/// Replace or insert the keyword block with the union of both keyword sets
///
/// Skipped when the source has no keywords the target lacks. A pre-existing
/// block is deleted whole, opening to closing marker inclusive, before the
/// freshly rendered block is inserted.
fn splice_keywords(
    source: &XmpRecord,
    target: &XmpRecord,
    lines: &mut Vec<String>,
) -> Result<(), PatchError> {
    if source.keywords_missing_from(target).next().is_none() {
        return Ok(());
    }

    // BTreeSet iteration keeps the rendered order deterministic
    let union: BTreeSet<&String> = source.keywords.union(&target.keywords).collect();

    if let Some(open) = lines.iter().position(|l| l.as_str() == SUBJECT_OPEN) {
        let close = lines[open..]
            .iter()
            .position(|l| l.as_str() == SUBJECT_CLOSE)
            .ok_or(PatchError::UnterminatedKeywordBlock)?;
        lines.drain(open..=open + close);
    }

    let insert_at = description_end(lines)?;
    let mut block = Vec::with_capacity(union.len() + 4);
    block.push(SUBJECT_OPEN.to_string());
    block.push("    <rdf:Bag>".to_string());
    for keyword in union {
        block.push(format!("     <rdf:li>{}</rdf:li>", escape_text(keyword)));
    }
    block.push("    </rdf:Bag>".to_string());
    block.push(SUBJECT_CLOSE.to_string());
    lines.splice(insert_at..insert_at, block);
    Ok(())
}

fn description_end(lines: &[String]) -> Result<usize, PatchError> {
    lines
        .iter()
        .position(|l| l.as_str() == DESCRIPTION_END)
        .ok_or(PatchError::DescriptionEndNotFound)
}

/// Minimal XML text escaping so rewritten keywords re-parse
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
