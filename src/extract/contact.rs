//! Name, email and phone extraction over the whole document

use crate::engine::{PosTag, TokenStream};
use crate::reference;

/// Longest prefix of a name run kept, in tokens.
const NAME_TOKEN_CAP: usize = 4;

/// First email-pattern match in the document, if any.
pub fn extract_email(text: &str) -> Option<String> {
    reference::EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Every phone-pattern match, normalized to its digits. A leading `+`
/// country prefix keeps its digits; formatting is dropped. Repeated
/// numbers are reported as often as they appear.
pub fn extract_mobile_numbers(text: &str) -> Vec<String> {
    reference::PHONE
        .find_iter(text)
        .map(|m| m.as_str().chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|digits| !digits.is_empty())
        .collect()
}

/// Candidate name: the first proper-noun chunk of at least two tokens,
/// truncated to four tokens, with the document's own spacing.
pub fn extract_name(stream: &TokenStream) -> Option<String> {
    stream
        .noun_chunks
        .iter()
        .find(|chunk| chunk.len() >= 2 && stream.tokens[chunk.start].pos == PosTag::ProperNoun)
        .map(|chunk| name_span(stream, chunk.start, chunk.end))
}

fn name_span(stream: &TokenStream, start: usize, end: usize) -> String {
    let end = end.min(start + NAME_TOKEN_CAP);
    stream.span_text(start, end).to_string()
}
