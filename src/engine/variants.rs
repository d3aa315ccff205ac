//! Case-variant expansion for literal phrase patterns

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-wide memo cache keyed by (phrase, combinations flag). Append-only
/// and never invalidated: expansion is a pure function of its inputs, so a
/// stale entry cannot exist.
static VARIANT_CACHE: Lazy<Mutex<HashMap<(String, bool), Arc<[String]>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Expand a phrase into the case variants the matchers register as literal
/// patterns.
///
/// Every phrase yields four baseline variants: as written, UPPERCASE,
/// lowercase, and Title Case. With `combinations` enabled, a multi-word
/// phrase additionally yields every per-word lowercase/titlecase assignment
/// (2^N variants for N words). Duplicates between the baseline and the
/// enumerated assignments are kept; matching downstream is set-based so
/// they are harmless.
pub fn expand_case_variants(phrase: &str, combinations: bool) -> Arc<[String]> {
    let key = (phrase.to_string(), combinations);
    {
        let cache = VARIANT_CACHE.lock().expect("variant cache lock");
        if let Some(hit) = cache.get(&key) {
            return Arc::clone(hit);
        }
    }
    let variants: Arc<[String]> = compute_variants(phrase, combinations).into();
    let mut cache = VARIANT_CACHE.lock().expect("variant cache lock");
    Arc::clone(cache.entry(key).or_insert(variants))
}

fn compute_variants(phrase: &str, combinations: bool) -> Vec<String> {
    let mut variants = vec![
        phrase.to_string(),
        phrase.to_uppercase(),
        phrase.to_lowercase(),
        title_case(phrase),
    ];

    let words: Vec<&str> = phrase.split_whitespace().collect();
    if combinations && words.len() > 1 {
        let n = words.len();
        for mask in 0..(1usize << n) {
            let assigned: Vec<String> = words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    if mask & (1 << i) != 0 {
                        title_word(word)
                    } else {
                        word.to_lowercase()
                    }
                })
                .collect();
            variants.push(assigned.join(" "));
        }
    }

    variants
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(title_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_baseline_variants() {
        let variants = expand_case_variants("machine learning", false);
        assert_eq!(
            variants.as_ref(),
            &[
                "machine learning".to_string(),
                "MACHINE LEARNING".to_string(),
                "machine learning".to_string(),
                "Machine Learning".to_string(),
            ]
        );
    }

    #[test]
    fn test_single_word_never_expands_combinations() {
        let plain = expand_case_variants("python", false);
        let combined = expand_case_variants("python", true);
        assert_eq!(plain.len(), 4);
        assert_eq!(combined.len(), 4);
        assert_eq!(plain.as_ref(), combined.as_ref());
    }

    #[test]
    fn test_combination_count_is_exhaustive() {
        let variants = expand_case_variants("bachelor of science", true);
        // 4 baseline + 2^3 assignments.
        assert_eq!(variants.len(), 4 + 8);
        let distinct: HashSet<&String> = variants.iter().collect();
        assert!(distinct.contains(&"bachelor of science".to_string()));
        assert!(distinct.contains(&"Bachelor Of Science".to_string()));
        assert!(distinct.contains(&"bachelor Of science".to_string()));
        assert!(distinct.contains(&"Bachelor of Science".to_string()));
        // All 2^3 assignments are present.
        let assignments: HashSet<&String> = variants[4..].iter().collect();
        assert_eq!(assignments.len(), 8);
    }

    #[test]
    fn test_two_word_assignments() {
        let variants = expand_case_variants("data science", true);
        assert_eq!(variants.len(), 4 + 4);
        let tail: Vec<&str> = variants[4..].iter().map(String::as_str).collect();
        assert!(tail.contains(&"data science"));
        assert!(tail.contains(&"Data science"));
        assert!(tail.contains(&"data Science"));
        assert!(tail.contains(&"Data Science"));
    }

    #[test]
    fn test_memoized_result_is_shared() {
        let first = expand_case_variants("memo cache probe", true);
        let second = expand_case_variants("memo cache probe", true);
        assert!(Arc::ptr_eq(&first, &second));
        // Flag participates in the key.
        let other = expand_case_variants("memo cache probe", false);
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[test]
    fn test_title_case_normalizes_inner_letters() {
        assert_eq!(title_case("kWAME nKRUMAH"), "Kwame Nkrumah");
        assert_eq!(title_word(""), "");
    }
}
