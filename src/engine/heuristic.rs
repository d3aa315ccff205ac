//! Built-in rule-based engine backend
//!
//! Tokenizes with unicode word segmentation, tags parts of speech from a
//! capitalization/suffix heuristic, lemmatizes with a few suffix rules,
//! groups nominal runs into noun chunks and recognizes DATE entities with
//! the composed date patterns. Serves as the standalone fallback when no
//! external NLP service is wired in.

use crate::engine::token::{EntitySpan, PosTag, Token, TokenStream, DATE_LABEL};
use crate::engine::NlpEngine;
use crate::reference;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEngine;

impl HeuristicEngine {
    pub fn new() -> Self {
        Self
    }
}

impl NlpEngine for HeuristicEngine {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn analyze(&self, text: &str) -> TokenStream {
        let tokens = tokenize(text);
        let noun_chunks = chunk_nouns(&tokens);
        let entities = recognize_dates(text, &tokens);
        TokenStream {
            text: text.to_string(),
            tokens,
            noun_chunks,
            entities,
        }
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    text.unicode_word_indices()
        .map(|(start, word)| Token {
            text: word.to_string(),
            start,
            end: start + word.len(),
            pos: tag(word),
            lemma: lemma_of(word),
        })
        .collect()
}

fn tag(word: &str) -> PosTag {
    let mut chars = word.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return PosTag::Other,
    };
    if word.chars().all(|c| c.is_numeric()) {
        PosTag::Number
    } else if first.is_uppercase() {
        PosTag::ProperNoun
    } else if first.is_alphabetic() {
        if word.len() > 5 && word.ends_with("ing") || word.len() > 4 && word.ends_with("ed") {
            PosTag::Verb
        } else {
            PosTag::Noun
        }
    } else {
        PosTag::Other
    }
}

fn lemma_of(word: &str) -> String {
    let lower = word.to_lowercase();
    let stem = lower.strip_suffix("'s").unwrap_or(&lower);
    if stem.len() > 4 && stem.ends_with("ies") {
        format!("{}y", &stem[..stem.len() - 3])
    } else if stem.len() > 5 && stem.ends_with("ing") {
        stem[..stem.len() - 3].to_string()
    } else if stem.len() > 4 && stem.ends_with("ed") {
        stem[..stem.len() - 2].to_string()
    } else if stem.len() > 3 && stem.ends_with('s') && !stem.ends_with("ss") {
        stem[..stem.len() - 1].to_string()
    } else {
        stem.to_string()
    }
}

/// Maximal runs of tokens sharing one nominal tag. Proper-noun and common
/// noun runs never merge into one chunk.
fn chunk_nouns(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut chunks: Vec<Range<usize>> = Vec::new();
    let mut run: Option<(usize, PosTag)> = None;
    for (index, token) in tokens.iter().enumerate() {
        let nominal = matches!(token.pos, PosTag::ProperNoun | PosTag::Noun);
        if let Some((start, pos)) = run {
            if !nominal || token.pos != pos {
                chunks.push(start..index);
                run = None;
            }
        }
        if run.is_none() && nominal {
            run = Some((index, token.pos));
        }
    }
    if let Some((start, _)) = run {
        chunks.push(start..tokens.len());
    }
    chunks
}

fn recognize_dates(text: &str, tokens: &[Token]) -> Vec<EntitySpan> {
    let mut entities = Vec::new();
    for hit in reference::DATE_RANGE.find_iter(text) {
        if let Some((start_token, end_token)) = token_span(tokens, hit.start(), hit.end()) {
            entities.push(EntitySpan {
                label: DATE_LABEL.to_string(),
                text: hit.as_str().to_string(),
                start_token,
                end_token,
                start_char: hit.start(),
                end_char: hit.end(),
            });
        }
    }
    entities
}

/// Token range `[first, last)` overlapping the byte range `[start, end)`.
fn token_span(tokens: &[Token], start: usize, end: usize) -> Option<(usize, usize)> {
    let first = tokens.iter().position(|t| t.end > start && t.start < end)?;
    let mut last = first;
    for (index, token) in tokens.iter().enumerate().skip(first) {
        if token.start < end {
            last = index;
        } else {
            break;
        }
    }
    Some((first, last + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_offsets() {
        let stream = HeuristicEngine::new().analyze("Hello, World! 42");
        let texts: Vec<&str> = stream.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "World", "42"]);
        assert_eq!(stream.tokens[0].start, 0);
        assert_eq!(stream.tokens[0].end, 5);
        assert_eq!(stream.tokens[1].start, 7);
        assert_eq!(&stream.text[stream.tokens[2].start..stream.tokens[2].end], "42");
    }

    #[test]
    fn test_pos_tagging_heuristics() {
        assert_eq!(tag("Accra"), PosTag::ProperNoun);
        assert_eq!(tag("developer"), PosTag::Noun);
        assert_eq!(tag("building"), PosTag::Verb);
        assert_eq!(tag("2015"), PosTag::Number);
        assert_eq!(tag("+"), PosTag::Other);
    }

    #[test]
    fn test_lemma_rules() {
        assert_eq!(lemma_of("Databases"), "database");
        assert_eq!(lemma_of("studies"), "study");
        assert_eq!(lemma_of("testing"), "test");
        assert_eq!(lemma_of("worked"), "work");
        assert_eq!(lemma_of("class"), "class");
        assert_eq!(lemma_of("Company's"), "company");
    }

    #[test]
    fn test_noun_chunks_split_on_tag_change() {
        let stream = HeuristicEngine::new().analyze("Ama Serwaa Mensah building resume documents, Accra 2020");
        let chunks: Vec<&str> = stream
            .noun_chunks
            .iter()
            .map(|r| stream.span_text(r.start, r.end))
            .collect();
        // Proper-noun run, common-noun run, trailing proper noun; the verb
        // and the number are not chunked.
        assert_eq!(chunks, vec!["Ama Serwaa Mensah", "resume documents", "Accra"]);
    }

    #[test]
    fn test_date_entity_recognition() {
        let stream = HeuristicEngine::new().analyze("Graduated Jun 2018 from Accra");
        let dates: Vec<&EntitySpan> = stream.entities_labeled(DATE_LABEL).collect();
        assert_eq!(dates.len(), 1);
        assert!(dates[0].text.contains("2018"));
        assert_eq!(
            &stream.text[dates[0].start_char..dates[0].end_char],
            dates[0].text
        );
        // Token coordinates bracket the same words.
        let covered = stream.span_text(dates[0].start_token, dates[0].end_token);
        assert!(covered.contains("2018"));
    }

    #[test]
    fn test_date_range_recognized_as_one_entity() {
        let stream = HeuristicEngine::new().analyze("KNUST Jan 2015 - Jun 2018 Accra");
        let dates: Vec<&EntitySpan> = stream.entities_labeled(DATE_LABEL).collect();
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].text, "Jan 2015 - Jun 2018");
    }

    #[test]
    fn test_unicode_text_keeps_valid_offsets() {
        let stream = HeuristicEngine::new().analyze("café résumé 2020");
        for token in &stream.tokens {
            assert_eq!(&stream.text[token.start..token.end], token.text);
        }
    }
}
