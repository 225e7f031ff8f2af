use crate::analyzer::rolling::mean;
use crate::lexicon::Lexicon;
use crate::model::{AnalysisSummary, SentenceScore};

/// Number of emotions reported in `top_emotions` by default.
pub const DEFAULT_TOP_N: usize = 3;

/// Reduces per-sentence scores to whole-document statistics.
///
/// `top_emotions` always holds `min(top_n, categories)` names. Categories are
/// ranked by total count; equal totals (including zero) keep lexicon order.
pub fn summarize(scores: &[SentenceScore], lexicon: &Lexicon, top_n: usize) -> AnalysisSummary {
    let valence: Vec<f64> = scores.iter().map(|s| s.valence_raw as f64).collect();

    let mut totals: Vec<(&str, u64)> = lexicon
        .emotion_names()
        .map(|name| {
            let total: u64 = scores
                .iter()
                .filter_map(|s| s.emotions_raw.get(name))
                .map(|&c| u64::from(c))
                .sum();
            (name, total)
        })
        .collect();

    // stable: ties stay in lexicon order
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    AnalysisSummary {
        sentence_count: scores.len(),
        avg_valence: mean(&valence),
        top_emotions: totals
            .into_iter()
            .take(top_n)
            .map(|(name, _)| name.to_string())
            .collect(),
    }
}
