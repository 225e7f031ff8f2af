//! Word tokenization
//!
//! Tokens are runs of letters with optional internal apostrophes or hyphens,
//! lowercased for lexicon lookup.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+(?:['’\-]\p{L}+)*").unwrap());

/// Splits a sentence into lowercase word tokens, in order.
pub fn tokenize(sentence: &str) -> Vec<String> {
    WORD.find_iter(sentence)
        .map(|m| m.as_str().to_lowercase().replace('’', "'"))
        .collect()
}
