//! Section header detection and boundary resolution

use crate::engine::{expand_case_variants, PhraseMatcher, TokenStream};
use crate::error::Result;
use crate::reference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Résumé section categories with dedicated extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Skills,
    Education,
    Experience,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
        };
        f.write_str(name)
    }
}

/// Detected section header with its token span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatch {
    pub section: SectionKind,
    /// First header token (inclusive).
    pub start: usize,
    /// One past the last header token.
    pub end: usize,
}

/// Scan the whole stream for known section headers. At most one match per
/// category: the earliest hit in document order wins and later headers of
/// the same category are ignored. Categories without a header are simply
/// absent from the result.
pub fn detect_sections(stream: &TokenStream) -> Result<Vec<SectionMatch>> {
    let mut sections = Vec::new();
    for (kind, synonyms) in reference::section_synonyms() {
        let mut patterns = Vec::new();
        for synonym in synonyms {
            patterns.extend(expand_case_variants(synonym, false).iter().cloned());
        }
        let matcher = PhraseMatcher::new(patterns)?;
        if let Some(hit) = matcher.find_first(stream, 0..stream.len()) {
            sections.push(SectionMatch {
                section: kind,
                start: hit.start,
                end: hit.end,
            });
        }
    }
    Ok(sections)
}

/// Token span of the content attributed to `section`: from immediately
/// after its header to immediately before the next header in end-index
/// order, or to the end of the document when it is the last section. `None`
/// when the section was not detected.
pub fn content_span(
    section: SectionKind,
    sections: &[SectionMatch],
) -> Option<(usize, Option<usize>)> {
    let mut ordered: Vec<&SectionMatch> = sections.iter().collect();
    ordered.sort_by_key(|s| s.end);
    let position = ordered.iter().position(|s| s.section == section)?;
    let start = ordered[position].end;
    let end = ordered.get(position + 1).map(|next| next.start);
    Some((start, end))
}
