//! Skill phrase matching within the skills span

use crate::engine::{expand_case_variants, PhraseMatcher, TokenStream};
use crate::error::Result;
use std::collections::HashSet;
use std::ops::Range;

/// Match the skill list against the given token range and return the
/// distinct matched surfaces, sorted. Overlapping hits each contribute
/// their own surface; repeated mentions collapse, so running this over its
/// own output's source span again yields the same set.
pub fn extract_skills(
    stream: &TokenStream,
    range: Range<usize>,
    skills: &[String],
) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    for skill in skills {
        patterns.extend(expand_case_variants(skill, false).iter().cloned());
    }
    let matcher = PhraseMatcher::new(patterns)?;

    let mut found = HashSet::new();
    for hit in matcher.find_matches(stream, range) {
        let surface = stream.span_text(hit.start, hit.end);
        if !surface.is_empty() {
            found.insert(surface.to_string());
        }
    }

    let mut surfaces: Vec<String> = found.into_iter().collect();
    surfaces.sort();
    Ok(surfaces)
}
