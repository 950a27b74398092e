//! Candidate validation
//!
//! Cheap lexical filter that rejects NER false positives such as lone
//! consonants or punctuation fragments. It is a heuristic, not a linguistic
//! name validator.

use once_cell::sync::Lazy;
use regex::Regex;

/// Vowels a candidate must contain at least one of
const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// ASCII letters, the Latin-1 block U+00C0..=U+00FF, apostrophe, space, hyphen
static NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ' -]+$").expect("static name pattern is valid"));

/// Check whether a candidate surface string is plausibly a name
pub fn is_valid_name_candidate(candidate: &str) -> bool {
    tracing::debug!(candidate, "Checking name candidate");

    if candidate.trim().is_empty() || !has_vowel(candidate) {
        tracing::warn!(candidate, "Candidate is empty or has no vowel");
        return false;
    }

    if !NAME_CHARS.is_match(candidate) {
        tracing::warn!(candidate, "Candidate contains invalid characters");
        return false;
    }

    true
}

fn has_vowel(candidate: &str) -> bool {
    candidate
        .chars()
        .flat_map(char::to_lowercase)
        .any(|c| VOWELS.contains(&c))
}
