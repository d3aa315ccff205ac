//! NLP engine seam and phrase matching utilities
//!
//! Extractors never talk to a tokenizer or tagger directly; they consume a
//! `TokenStream` produced through the `NlpEngine` trait. The built-in
//! heuristic backend keeps the pipeline self-contained, and alternative
//! backends (or test stubs) plug in without touching the extractors.

pub mod heuristic;
pub mod matcher;
pub mod model;
pub mod token;
pub mod variants;

pub use heuristic::HeuristicEngine;
pub use matcher::{PhraseMatch, PhraseMatcher};
pub use model::{EntityLabel, EntityModel, JsonEntityModel, LabeledEntities, NoEntityModel};
pub use token::{EntitySpan, PosTag, Token, TokenStream};
pub use variants::expand_case_variants;

/// Tokenization, tagging and entity recognition backend.
pub trait NlpEngine: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Analyze text into an immutable token stream.
    fn analyze(&self, text: &str) -> TokenStream;
}
