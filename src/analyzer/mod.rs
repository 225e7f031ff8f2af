// Analyzer module: scoring, smoothing and summary, plus the analyzers built on them.

pub mod emotion_arc;
pub mod lexical_diversity;
pub mod rolling;
pub mod scorer;
pub mod summary;

use crate::model::AnalysisError;

pub use emotion_arc::{analyze, analyze_with, EmotionArcAnalyzer, Options, DEFAULT_WINDOW};
pub use lexical_diversity::{LexicalDiversityAnalyzer, LexicalReport};
pub use rolling::{roll, Window};
pub use scorer::Scorer;
pub use summary::{summarize, DEFAULT_TOP_N};

/// Capability shared by every analyzer: accepts text, returns a structured result.
pub trait TextAnalyzer: Send + Sync {
    /// Key under which the result appears in a combined report.
    fn name(&self) -> &str;
    fn analyze_text(&self, text: &str) -> Result<serde_json::Value, AnalysisError>;
}
