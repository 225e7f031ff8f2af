use crate::lexicon::{Lexicon, Polarity};
use crate::model::SentenceScore;
use crate::text::tokenize;
use std::collections::BTreeMap;

/// Applies a lexicon to the tokens of one sentence.
pub struct Scorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Scorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the valence (positive hits minus negative hits) and the count
    /// of every emotion category. Categories without hits are present with 0.
    pub fn score(&self, tokens: &[String]) -> (i64, BTreeMap<String, u32>) {
        let mut valence = 0i64;
        let mut counts = vec![0u32; self.lexicon.emotion_count()];

        for token in tokens {
            match self.lexicon.polarity(token) {
                Some(Polarity::Positive) => valence += 1,
                Some(Polarity::Negative) => valence -= 1,
                None => {}
            }
            for slot in self.lexicon.emotion_hits(token) {
                counts[slot] += 1;
            }
        }

        let emotions = self
            .lexicon
            .emotion_names()
            .map(str::to_string)
            .zip(counts)
            .collect();

        (valence, emotions)
    }

    /// Tokenizes and scores a sentence.
    pub fn score_sentence(&self, index: usize, text: &str) -> SentenceScore {
        let (valence_raw, emotions_raw) = self.score(&tokenize(text));
        SentenceScore {
            index,
            text: text.to_string(),
            valence_raw,
            emotions_raw,
        }
    }
}
