// Core structs: SentenceScore, AnalysisSummary, AnalysisResult, EmotionPeak
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Score of a single sentence, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    pub index: usize,
    pub text: String,
    pub valence_raw: i64,
    pub emotions_raw: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub sentence_count: usize,
    /// Mean of the raw (not rolling) valence; 0 for an empty document.
    pub avg_valence: f64,
    /// Emotion categories ranked by total count, ties in lexicon order.
    pub top_emotions: Vec<String>,
}

/// Full output of one `analyze` call. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentences: Vec<SentenceScore>,
    pub valence_rolling: Vec<f64>,
    pub emotions_rolling: BTreeMap<String, Vec<f64>>,
    pub summary: AnalysisSummary,
}

/// Highest rolling value of one emotion and where it first occurs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionPeak {
    pub emotion: String,
    pub value: f64,
    /// `None` when the emotion never registers.
    pub index: Option<usize>,
}

impl AnalysisResult {
    /// Raw valence series, one value per sentence.
    pub fn valence_raw(&self) -> Vec<f64> {
        self.sentences.iter().map(|s| s.valence_raw as f64).collect()
    }

    /// Peak of every rolling emotion series, in the given category order.
    pub fn peaks_in_order<'a, I>(&self, categories: I) -> Vec<EmotionPeak>
    where
        I: IntoIterator<Item = &'a str>,
    {
        categories
            .into_iter()
            .map(|name| {
                let series = self
                    .emotions_rolling
                    .get(name)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let (value, index) = crate::analyzer::rolling::first_max(series);
                EmotionPeak {
                    emotion: name.to_string(),
                    value,
                    index: index.filter(|_| value > 0.0),
                }
            })
            .collect()
    }

    /// Peaks in the default lexicon's category order.
    pub fn peaks(&self) -> Vec<EmotionPeak> {
        self.peaks_in_order(crate::lexicon::Lexicon::default_ref().emotion_names())
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("window size must be a positive integer, got {0}")]
    InvalidWindow(usize),
    #[error("text too long: {len} characters exceeds the limit of {max}")]
    TextTooLong { len: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("word '{0}' is listed as both positive and negative")]
    OverlappingPolarity(String),
    #[error("emotion category name must not be empty")]
    EmptyCategoryName,
    #[error("emotion category '{0}' is defined more than once")]
    DuplicateCategory(String),
    #[error("'{0}' is a polarity category and cannot be used as an emotion")]
    ReservedCategoryName(String),
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
