//! Sentence segmentation
//!
//! A boundary is a run of `.`, `!` or `?` followed by whitespace or the end
//! of the text. The punctuation stays with the sentence it closes.
//!
//! Abbreviations are not special-cased: "Mr. Smith" yields two sentences.

use crate::normalizer::normalize;
use regex::Regex;
use std::sync::LazyLock;

static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").unwrap());

/// Splits text into ordered, trimmed, non-empty sentences.
pub fn segment(text: &str) -> Vec<String> {
    let text = normalize(text);
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in BOUNDARY.find_iter(&text) {
        push_sentence(&mut sentences, &text[start..boundary.end()]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        out.push(fragment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let result = segment("This is sentence one. This is sentence two! Is this sentence three?");
        assert_eq!(
            result,
            vec!["This is sentence one.", "This is sentence two!", "Is this sentence three?"]
        );
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t").is_empty());
    }

    #[test]
    fn test_punctuation_run_is_one_boundary() {
        assert_eq!(segment("Stop!! Now. Wait... what?!"), vec!["Stop!!", "Now.", "Wait...", "what?!"]);
    }

    #[test]
    fn test_mixed_line_endings() {
        let text = "First sentence.\r\nSecond sentence.\rThird sentence.\nFourth sentence.";
        assert_eq!(segment(text).len(), 4);
    }

    #[test]
    fn test_whitespace_inside_sentence_collapsed() {
        assert_eq!(segment("A   long\n\nline. Next."), vec!["A long line.", "Next."]);
    }

    #[test]
    fn test_trailing_fragment_without_punctuation() {
        assert_eq!(segment("Done. and then"), vec!["Done.", "and then"]);
    }

    #[test]
    fn test_glued_punctuation_is_not_a_boundary() {
        assert_eq!(segment("Pi is 3.14 or so."), vec!["Pi is 3.14 or so."]);
    }

    #[test]
    fn test_abbreviations_over_split() {
        assert_eq!(segment("Mr. Smith left."), vec!["Mr.", "Smith left."]);
    }
}
