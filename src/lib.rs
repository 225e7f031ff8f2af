//! # emotion-arc
//!
//! Lexicon-based emotion arcs for narrative text: per-sentence valence and
//! emotion counts, smoothed with a trailing rolling window, plus document
//! level summary statistics.
//!
//! ```
//! let result = emotion_arc::analyze("I am happy. I am sad.", 2).unwrap();
//! assert_eq!(result.summary.sentence_count, 2);
//! assert_eq!(result.valence_rolling, vec![1.0, 0.0]);
//! ```
//!
//! Analysis is pure: the same text and window always give the same result,
//! and the built-in lexicon is an immutable, process-wide value that can be
//! read from any number of threads.

pub mod analyzer;
pub mod config;
pub mod export;
pub mod lexicon;
pub mod model;
pub mod normalizer;
pub mod orchestrator;
pub mod text;

pub use analyzer::{
    analyze, analyze_with, roll, summarize, EmotionArcAnalyzer, LexicalDiversityAnalyzer,
    Options, Scorer, TextAnalyzer, Window, DEFAULT_TOP_N, DEFAULT_WINDOW,
};
pub use config::{load_config, AnalysisConfig, AppConfig};
pub use lexicon::Lexicon;
pub use model::{
    AnalysisError, AnalysisResult, AnalysisSummary, ConfigError, EmotionPeak, ExportError,
    LexiconError, SentenceScore,
};
pub use orchestrator::{CombinedReport, Orchestrator};
pub use text::{segment, tokenize};
