//! Token-aligned literal phrase matching over a token stream

use crate::engine::token::TokenStream;
use crate::error::{CvParserError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashMap;
use std::ops::Range;

/// Match of one registered pattern against a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Index of the pattern that matched.
    pub pattern: usize,
    /// First matched token (inclusive).
    pub start: usize,
    /// One past the last matched token.
    pub end: usize,
}

/// Multi-token literal matcher. Patterns are whitespace-normalized phrases;
/// a pattern matches a run of consecutive tokens whose texts, joined with
/// single spaces, equal the pattern exactly (case-sensitive). Case coverage
/// comes from registering expanded variants, not from the automaton.
pub struct PhraseMatcher {
    automaton: AhoCorasick,
    patterns: Vec<String>,
}

impl PhraseMatcher {
    /// Build a matcher from literal phrase patterns. Empty patterns are
    /// skipped; inner whitespace is normalized to single spaces so patterns
    /// line up with the token join.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|p| !p.is_empty())
            .collect();

        // Standard match semantics: the scan below is overlapping, which
        // leftmost-longest automatons do not support.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| CvParserError::Matcher(e.to_string()))?;

        Ok(Self { automaton, patterns })
    }

    pub fn pattern(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All token-aligned matches within `range`, sorted by (start, end) so
    /// callers taking the first match always get the earliest one in
    /// document order. Overlapping and nested matches are all reported;
    /// exact duplicate spans from different pattern variants collapse to
    /// one match.
    pub fn find_matches(&self, stream: &TokenStream, range: Range<usize>) -> Vec<PhraseMatch> {
        let range = clamp(range, stream.len());
        let tokens = &stream.tokens[range.clone()];
        if tokens.is_empty() || self.patterns.is_empty() {
            return Vec::new();
        }

        // Join token texts with single spaces and remember where each token
        // begins and ends in the joined string.
        let mut joined = String::new();
        let mut token_at_start = HashMap::new();
        let mut token_at_end = HashMap::new();
        for (index, token) in tokens.iter().enumerate() {
            if index > 0 {
                joined.push(' ');
            }
            token_at_start.insert(joined.len(), index);
            joined.push_str(&token.text);
            token_at_end.insert(joined.len(), index);
        }

        let mut matches = Vec::new();
        for hit in self.automaton.find_overlapping_iter(&joined) {
            // Only hits that cover whole tokens count; a pattern must not
            // match inside a longer token.
            let first = match token_at_start.get(&hit.start()) {
                Some(&index) => index,
                None => continue,
            };
            let last = match token_at_end.get(&hit.end()) {
                Some(&index) => index,
                None => continue,
            };
            matches.push(PhraseMatch {
                pattern: hit.pattern().as_usize(),
                start: range.start + first,
                end: range.start + last + 1,
            });
        }

        matches.sort_by_key(|m| (m.start, m.end, m.pattern));
        matches.dedup_by(|a, b| a.start == b.start && a.end == b.end);
        matches
    }

    /// Earliest match in document order, if any.
    pub fn find_first(&self, stream: &TokenStream, range: Range<usize>) -> Option<PhraseMatch> {
        self.find_matches(stream, range).into_iter().next()
    }
}

fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    let end = range.end.min(len).max(start);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::heuristic::HeuristicEngine;
    use crate::engine::NlpEngine;

    fn analyzed(text: &str) -> TokenStream {
        HeuristicEngine::new().analyze(text)
    }

    #[test]
    fn test_multiword_match_across_tokens() {
        let stream = analyzed("Skilled in machine learning and statistics");
        let matcher = PhraseMatcher::new(["machine learning"]).unwrap();
        let matches = matcher.find_matches(&stream, 0..stream.len());
        assert_eq!(matches.len(), 1);
        assert_eq!(stream.span_text(matches[0].start, matches[0].end), "machine learning");
    }

    #[test]
    fn test_no_partial_token_match() {
        let stream = analyzed("writes javascript daily");
        let matcher = PhraseMatcher::new(["java", "javascript"]).unwrap();
        let matches = matcher.find_matches(&stream, 0..stream.len());
        assert_eq!(matches.len(), 1);
        assert_eq!(stream.span_text(matches[0].start, matches[0].end), "javascript");
    }

    #[test]
    fn test_matches_sorted_by_document_order() {
        let stream = analyzed("python then sql then python again");
        let matcher = PhraseMatcher::new(["sql", "python"]).unwrap();
        let matches = matcher.find_matches(&stream, 0..stream.len());
        let starts: Vec<usize> = matches.iter().map(|m| m.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        assert_eq!(matches.len(), 3);
        assert_eq!(
            matcher.pattern(matches[0].pattern),
            Some("python")
        );
    }

    #[test]
    fn test_overlapping_and_nested_matches_reported() {
        let stream = analyzed("natural language processing");
        let matcher =
            PhraseMatcher::new(["natural language", "language processing", "language"]).unwrap();
        let matches = matcher.find_matches(&stream, 0..stream.len());
        let surfaces: Vec<&str> = matches
            .iter()
            .map(|m| stream.span_text(m.start, m.end))
            .collect();
        assert_eq!(
            surfaces,
            vec!["natural language", "language", "language processing"]
        );
    }

    #[test]
    fn test_duplicate_variant_spans_collapse() {
        let stream = analyzed("SQL queries");
        let matcher = PhraseMatcher::new(["SQL", "SQL"]).unwrap();
        let matches = matcher.find_matches(&stream, 0..stream.len());
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_range_restricts_search() {
        let stream = analyzed("python header python body");
        let matcher = PhraseMatcher::new(["python"]).unwrap();
        let matches = matcher.find_matches(&stream, 1..stream.len());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 2);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let stream = analyzed("short text");
        let matcher = PhraseMatcher::new(["short"]).unwrap();
        assert!(matcher.find_matches(&stream, 5..9).is_empty());
        assert!(matcher.find_first(&stream, 2..1).is_none());
    }

    #[test]
    fn test_empty_pattern_list() {
        let stream = analyzed("anything");
        let matcher = PhraseMatcher::new(Vec::<String>::new()).unwrap();
        assert!(matcher.is_empty());
        assert!(matcher.find_matches(&stream, 0..stream.len()).is_empty());
    }
}
