//! Experience extraction via proper-noun chunking

use crate::engine::{NlpEngine, PosTag, Token};
use crate::reference;
use serde::{Deserialize, Serialize};

const KEYWORD: &str = "experience";

/// Experience sentences in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub sentences: Vec<String>,
}

impl ExperienceRecord {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Chunk the whole document into proper-noun runs and keep the tail of
/// every chunk mentioning the experience keyword.
///
/// The text is whitespace-normalized and analyzed; tokens whose surface or
/// lemma is a stopword are dropped, so runs join across removed stopwords.
/// Maximal runs of at least two proper-noun tokens form chunks; a chunk
/// containing "experience" (case-insensitive) contributes its text from
/// ten bytes past the keyword's start. Tails shorter than that come out
/// empty and are kept anyway.
pub fn extract_experience(engine: &dyn NlpEngine, text: &str) -> ExperienceRecord {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return ExperienceRecord::default();
    }
    let analyzed = engine.analyze(&normalized);

    let stop = reference::stop_words();
    let filtered: Vec<&Token> = analyzed
        .tokens
        .iter()
        .filter(|t| {
            !stop.contains(t.text.to_lowercase().as_str()) && !stop.contains(t.lemma.as_str())
        })
        .collect();

    let mut sentences = Vec::new();
    for chunk in proper_noun_chunks(&filtered) {
        let lowered = chunk.to_lowercase();
        if let Some(at) = lowered.find(KEYWORD) {
            let tail = chunk
                .get(at + KEYWORD.len()..)
                .unwrap_or_default()
                .to_string();
            sentences.push(tail);
        }
    }
    ExperienceRecord { sentences }
}

/// Maximal runs of two or more consecutive proper-noun tokens, joined with
/// single spaces. Consecutive means adjacent in the filtered sequence.
fn proper_noun_chunks(tokens: &[&Token]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for token in tokens {
        if token.pos == PosTag::ProperNoun {
            run.push(token.text.as_str());
        } else {
            if run.len() >= 2 {
                chunks.push(run.join(" "));
            }
            run.clear();
        }
    }
    if run.len() >= 2 {
        chunks.push(run.join(" "));
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeuristicEngine;

    #[test]
    fn test_keyword_chunk_truncated_past_keyword() {
        let engine = HeuristicEngine::new();
        let record = extract_experience(
            &engine,
            "Work Experience Turntabl Software Accra\nwrote plenty of code",
        );
        assert_eq!(record.sentences, vec![" Turntabl Software Accra"]);
    }

    #[test]
    fn test_chunk_without_keyword_is_ignored() {
        let engine = HeuristicEngine::new();
        let record = extract_experience(&engine, "Accra Ghana Lagos Nigeria all visited");
        assert!(record.sentences.is_empty());
    }

    #[test]
    fn test_short_tail_kept_as_empty_sentence() {
        let engine = HeuristicEngine::new();
        let record = extract_experience(&engine, "Work Experience\nplain lowercase text follows");
        assert_eq!(record.sentences, vec!["".to_string()]);
    }

    #[test]
    fn test_single_proper_noun_never_chunks() {
        let engine = HeuristicEngine::new();
        let record = extract_experience(&engine, "Experience plain words only here");
        assert!(record.sentences.is_empty());
    }

    #[test]
    fn test_runs_join_across_removed_stopwords() {
        let engine = HeuristicEngine::new();
        // "of" is a stopword, so the run continues across it.
        let record = extract_experience(&engine, "Experience of Turntabl plain tail");
        assert_eq!(record.sentences, vec![" Turntabl"]);
    }

    #[test]
    fn test_multiple_chunks_collected_in_order() {
        let engine = HeuristicEngine::new();
        let record = extract_experience(
            &engine,
            "Work Experience Turntabl then lowercase gap Experience Accra Hub next",
        );
        assert_eq!(record.sentences.len(), 2);
        assert_eq!(record.sentences[0], " Turntabl");
        assert_eq!(record.sentences[1], " Accra Hub");
    }

    #[test]
    fn test_empty_input() {
        let engine = HeuristicEngine::new();
        assert!(extract_experience(&engine, "   ").is_empty());
    }
}
