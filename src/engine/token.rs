//! Token stream types shared by the engine backends and the extractors

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Entity label used for recognized dates.
pub const DATE_LABEL: &str = "DATE";

/// Coarse part-of-speech tag attached to each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    ProperNoun,
    Noun,
    Verb,
    Number,
    Other,
}

/// Single token with its byte offsets into the analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Byte offset of the first byte of the token.
    pub start: usize,
    /// Byte offset one past the last byte of the token.
    pub end: usize,
    pub pos: PosTag,
    /// Lowercased base form used for stopword filtering.
    pub lemma: String,
}

/// Labeled span produced by entity recognition, carried in both token and
/// byte coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: String,
    pub text: String,
    pub start_token: usize,
    pub end_token: usize,
    pub start_char: usize,
    pub end_char: usize,
}

/// Analyzed document: the original text plus ordered tokens, noun chunk
/// groupings and entity spans. Built once per document and read by every
/// extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenStream {
    pub text: String,
    pub tokens: Vec<Token>,
    /// Token-index ranges of noun chunks, in document order.
    pub noun_chunks: Vec<Range<usize>>,
    pub entities: Vec<EntitySpan>,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Surface text covered by the token range `[start, end)`, sliced from
    /// the original text so document spacing is preserved. Empty for empty
    /// or out-of-range spans.
    pub fn span_text(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.tokens.len());
        if start >= end {
            return "";
        }
        &self.text[self.tokens[start].start..self.tokens[end - 1].end]
    }

    /// Text covered by the tokens before `index`.
    pub fn text_before(&self, index: usize) -> &str {
        self.span_text(0, index)
    }

    /// Text covered by the tokens from `index` to the end.
    pub fn text_from(&self, index: usize) -> &str {
        self.span_text(index, self.tokens.len())
    }

    /// Entities carrying the given label.
    pub fn entities_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a EntitySpan> {
        self.entities.iter().filter(move |e| e.label == label)
    }
}
