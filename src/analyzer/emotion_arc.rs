use crate::analyzer::rolling::{roll, Window};
use crate::analyzer::scorer::Scorer;
use crate::analyzer::summary::{summarize, DEFAULT_TOP_N};
use crate::analyzer::TextAnalyzer;
use crate::config::AnalysisConfig;
use crate::lexicon::Lexicon;
use crate::model::{AnalysisError, AnalysisResult, SentenceScore};
use crate::text::segment;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Rolling window used when the caller does not pick one.
pub const DEFAULT_WINDOW: usize = Window::DEFAULT.get();

/// Validated parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub window: Window,
    pub top_n: usize,
}

impl Options {
    pub fn new(window: usize, top_n: usize) -> Result<Self, AnalysisError> {
        Ok(Self {
            window: Window::new(window)?,
            top_n,
        })
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            window: Window::DEFAULT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Computes the emotion arc of `text` with the built-in lexicon.
///
/// Fails only when `window` is 0. Empty or blank text yields an empty,
/// zero-valued result.
pub fn analyze(text: &str, window: usize) -> Result<AnalysisResult, AnalysisError> {
    let options = Options::new(window, DEFAULT_TOP_N)?;
    Ok(analyze_with(text, &options, Lexicon::default_ref()))
}

/// Segment, score every sentence, smooth every series with the same window
/// and summarize the raw scores.
pub fn analyze_with(text: &str, options: &Options, lexicon: &Lexicon) -> AnalysisResult {
    let scorer = Scorer::new(lexicon);
    let sentences: Vec<SentenceScore> = segment(text)
        .iter()
        .enumerate()
        .map(|(i, s)| scorer.score_sentence(i, s))
        .collect();

    let valence_raw: Vec<f64> = sentences.iter().map(|s| s.valence_raw as f64).collect();
    let valence_rolling = roll(&valence_raw, options.window);

    let emotions_rolling: BTreeMap<String, Vec<f64>> = lexicon
        .emotion_names()
        .map(|name| {
            let raw: Vec<f64> = sentences
                .iter()
                .map(|s| s.emotions_raw.get(name).copied().unwrap_or(0) as f64)
                .collect();
            (name.to_string(), roll(&raw, options.window))
        })
        .collect();

    let summary = summarize(&sentences, lexicon, options.top_n);

    debug!(
        sentences = summary.sentence_count,
        window = options.window.get(),
        avg_valence = summary.avg_valence,
        "emotion arc computed"
    );

    AnalysisResult {
        sentences,
        valence_rolling,
        emotions_rolling,
        summary,
    }
}

/// Emotion arc as a [`TextAnalyzer`] capability.
pub struct EmotionArcAnalyzer {
    options: Options,
    max_text_length: Option<usize>,
    lexicon: Arc<Lexicon>,
}

impl EmotionArcAnalyzer {
    /// Rejects an invalid window here, before any text is seen.
    pub fn new(config: &AnalysisConfig, lexicon: Arc<Lexicon>) -> Result<Self, AnalysisError> {
        Ok(Self {
            options: Options::new(config.window, config.top_n)?,
            max_text_length: config.max_text_length,
            lexicon,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Runs the analysis after checking the configured length limit.
    pub fn run(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if let Some(max) = self.max_text_length {
            let len = text.chars().count();
            if len > max {
                return Err(AnalysisError::TextTooLong { len, max });
            }
        }
        Ok(analyze_with(text, &self.options, &self.lexicon))
    }

    /// Report entry for an already computed result, with peaks in lexicon order.
    pub fn report_entry(&self, result: &AnalysisResult) -> serde_json::Value {
        let peaks = result.peaks_in_order(self.lexicon.emotion_names());
        serde_json::json!({
            "window": self.options.window.get(),
            "result": result,
            "peaks": peaks,
        })
    }
}

impl TextAnalyzer for EmotionArcAnalyzer {
    fn name(&self) -> &str {
        "emotion_arc"
    }

    fn analyze_text(&self, text: &str) -> Result<serde_json::Value, AnalysisError> {
        let result = self.run(text)?;
        Ok(self.report_entry(&result))
    }
}
