use std::collections::HashSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way browsers encode a URI component
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Lowercase a phrase and collapse any run of whitespace into a single space
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Every letter of a phrase, lowercased, whitespace dropped
pub fn phrase_letters(phrase: &str) -> Vec<char> {
    phrase
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Distinct letters of a phrase, lowercased, whitespace dropped, in order of first appearance
pub fn distinct_letters(phrase: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    phrase_letters(phrase)
        .into_iter()
        .filter(|c| seen.insert(*c))
        .collect()
}

/// First character of every space-separated token
pub fn first_letters(phrase: &str) -> Vec<char> {
    phrase
        .split(' ')
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Check if every letter of the phrase is available in the bank
pub fn bank_covers(phrase: &str, bank: &[char]) -> bool {
    let available: HashSet<char> = bank.iter().copied().collect();
    distinct_letters(phrase).iter().all(|c| available.contains(c))
}
