//! Word tokenizer feeding the TF-IDF vectorizer.
//!
//! Text is lowercased and split into maximal runs of word characters: Unicode
//! letters (`\p{L}`), numbers (`\p{N}`) and `_`. Combining marks are not word
//! characters, so they split runs. Runs shorter than two characters are
//! discarded, so "a", "I" and stray digits never enter the vocabulary.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_TOKEN: Regex =
        Regex::new(r"[\p{L}\p{N}_]{2,}").expect("WORD_TOKEN regex is valid");
}

/// Tokenize `text` into lowercase word tokens, preserving input order and duplicates.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_TOKEN
        .find_iter(&lowered)
        .map(|token| token.as_str().to_string())
        .collect()
}
