//! Education extraction: school matching, course lookup and nearest-date
//! association

use crate::engine::token::DATE_LABEL;
use crate::engine::{expand_case_variants, NlpEngine, PhraseMatcher, TokenStream};
use crate::error::Result;
use crate::reference::{self, ReferenceData};
use serde::{Deserialize, Serialize};

/// One school mention with the course and date attributed to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolEntry {
    pub name: String,
    /// First course match after the school mention; empty when none.
    #[serde(default)]
    pub course: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Extract one entry per school phrase match inside the education section
/// text. The section is re-analyzed as its own document, so all
/// coordinates here are section-local. Repeated mentions of the same
/// school produce repeated entries; nothing is deduplicated.
pub fn extract_education(
    engine: &dyn NlpEngine,
    section_text: &str,
    reference: &ReferenceData,
) -> Result<Vec<SchoolEntry>> {
    let trimmed = section_text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let local = engine.analyze(trimmed);

    let mut school_patterns = Vec::new();
    for school in &reference.schools {
        school_patterns.extend(expand_case_variants(school, false).iter().cloned());
    }
    let school_matcher = PhraseMatcher::new(school_patterns)?;

    // Courses are the one list matched with combination variants enabled.
    let mut course_patterns = Vec::new();
    for course in &reference.courses {
        course_patterns.extend(expand_case_variants(course, true).iter().cloned());
    }
    let course_matcher = PhraseMatcher::new(course_patterns)?;

    let mut entries = Vec::new();
    for hit in school_matcher.find_matches(&local, 0..local.len()) {
        let name = local.span_text(hit.start, hit.end).to_string();
        if name.is_empty() {
            continue;
        }
        let course = course_matcher
            .find_first(&local, hit.end..local.len())
            .map(|m| local.span_text(m.start, m.end).to_string())
            .unwrap_or_default();
        let date = associate_date(engine, &local, hit.start, hit.end);
        entries.push(SchoolEntry { name, course, date });
    }
    Ok(entries)
}

/// Pick the date for a school span: the DATE entity closest to the span
/// across both remainders, with a regex fallback when neither remainder
/// has entities.
fn associate_date(
    engine: &dyn NlpEngine,
    local: &TokenStream,
    start: usize,
    end: usize,
) -> Option<String> {
    let span_start = local.tokens[start].start;
    let span_end = local.tokens[end - 1].end;

    let left_raw = local.text_before(start);
    let right_raw = local.text_from(end);
    let left = left_raw.trim().replace('\n', " ");
    let right = right_raw.trim().replace('\n', " ");

    let left_best = nearest_date(engine, &left, span_start, span_end);
    let right_best = nearest_date(engine, &right, span_start, span_end);

    let chosen = match (left_best, right_best) {
        // Exact distance ties go to the right remainder.
        (Some(l), Some(r)) => Some(if r.1 <= l.1 { r } else { l }),
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    };
    if let Some((text, _)) = chosen {
        return Some(text);
    }

    // No entities on either side: pattern fallback, left remainder first.
    reference::DATE_RANGE
        .find(left_raw.trim())
        .or_else(|| reference::DATE_RANGE.find(right_raw.trim()))
        .map(|m| m.as_str().to_string())
}

/// Closest DATE entity by euclidean proximity over (start, end) offset
/// pairs. The school span is in section coordinates while entities are in
/// remainder coordinates; that asymmetry is part of the heuristic, kept
/// as-is. Among equal distances the earliest entity wins.
fn nearest_date(
    engine: &dyn NlpEngine,
    text: &str,
    span_start: usize,
    span_end: usize,
) -> Option<(String, f64)> {
    if text.is_empty() {
        return None;
    }
    let analyzed = engine.analyze(text);
    analyzed
        .entities_labeled(DATE_LABEL)
        .map(|e| {
            (
                e.text.clone(),
                offset_distance(span_start, e.start_char, span_end, e.end_char),
            )
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

fn offset_distance(x: usize, x1: usize, y: usize, y1: usize) -> f64 {
    let dx = x as f64 - x1 as f64;
    let dy = y as f64 - y1 as f64;
    (dx * dx + dy * dy).sqrt()
}
