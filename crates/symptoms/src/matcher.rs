//! Free-text symptom matching.
//!
//! Maps an unstructured description of a complaint ("I am suffering from
//! fever", "my cold and cough are bad") to the known symptom records it
//! refers to.
//!
//! Matching is phrase-then-token, first applicable rule wins:
//!
//! 1. Input shorter than 3 characters is not evaluated at all.
//! 2. If the lowercased text contains `"suffering from"`, the substring after
//!    that phrase is tested for containment against every symptom name.
//! 3. Else if it contains `"have a"` or `"having a"` (in that preference
//!    order), the substring after the phrase is tested the same way.
//! 4. Else each whitespace token longer than 3 characters is tested as a
//!    substring of the symptom name, and the symptom name as a whole is
//!    tested as a substring of the full text.
//!
//! Matching is intentionally loose: plain substring containment, no word
//! boundaries, no fuzzy distance. A short symptom name embedded in an
//! unrelated longer word will match. That imprecision is part of the
//! contract; callers wanting better precision need a different matcher, not
//! a "fixed" version of this one.
//!
//! The phrase triggers are fixed English strings and do not generalise to
//! other phrasings or languages.

use crate::table::{SymptomRecord, SymptomTable};

/// Inputs shorter than this are not evaluated, to avoid spurious one- and
/// two-letter matches.
const MIN_QUERY_CHARS: usize = 3;

/// Fallback tokens must be strictly longer than this to participate.
const MIN_TOKEN_CHARS: usize = 3;

/// Matches free text against the symptom table.
///
/// Returns the matched records in table-iteration order. An empty result is
/// the normal "no known condition recognised" outcome, covering both
/// too-short input and input that simply matches nothing.
pub fn match_symptoms<'a>(raw_text: &str, table: &'a SymptomTable) -> Vec<&'a SymptomRecord> {
    if raw_text.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let text = raw_text.to_lowercase();

    if let Some(tail) = after_phrase(&text, "suffering from") {
        return table.iter().filter(|r| tail.contains(&r.symptom)).collect();
    }

    // "have a" is checked before "having a"; when both occur, "have a" wins.
    if let Some(tail) = after_phrase(&text, "have a").or_else(|| after_phrase(&text, "having a")) {
        return table.iter().filter(|r| tail.contains(&r.symptom)).collect();
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    table
        .iter()
        .filter(|r| {
            tokens
                .iter()
                .any(|t| t.chars().count() > MIN_TOKEN_CHARS && r.symptom.contains(t))
                || text.contains(&r.symptom)
        })
        .collect()
}

/// Returns the trimmed substring after the first occurrence of `phrase`, or
/// `None` if the phrase is absent.
fn after_phrase<'t>(text: &'t str, phrase: &str) -> Option<&'t str> {
    text.find(phrase)
        .map(|at| text[at + phrase.len()..].trim())
}
