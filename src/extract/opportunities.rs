//! Job-type opportunity phrase matching

use crate::engine::{expand_case_variants, PhraseMatcher, TokenStream};
use crate::error::Result;
use crate::reference;
use std::collections::HashSet;

/// Match the job-type phrase list over the whole document and return the
/// distinct matched surfaces, sorted. Surfaces that are themselves bare
/// stopwords are removed after collection.
pub fn extract_opportunities(stream: &TokenStream, phrases: &[String]) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    for phrase in phrases {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            continue;
        }
        patterns.extend(expand_case_variants(trimmed, false).iter().cloned());
    }
    let matcher = PhraseMatcher::new(patterns)?;

    let mut found: HashSet<String> = HashSet::new();
    for hit in matcher.find_matches(stream, 0..stream.len()) {
        let surface = stream.span_text(hit.start, hit.end);
        if !surface.is_empty() {
            found.insert(surface.to_string());
        }
    }

    let stop = reference::stop_words();
    found.retain(|surface| !stop.contains(surface.as_str()));

    let mut surfaces: Vec<String> = found.into_iter().collect();
    surfaces.sort();
    Ok(surfaces)
}
