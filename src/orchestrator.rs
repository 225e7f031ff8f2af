use crate::analyzer::TextAnalyzer;
use crate::model::AnalysisError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Results of several analyzers over the same text, keyed by analyzer name.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedReport {
    pub generated_at: DateTime<Utc>,
    pub results: BTreeMap<String, serde_json::Value>,
}

/// Runs a set of analyzers and merges their output by capability.
#[derive(Default)]
pub struct Orchestrator {
    analyzers: Vec<Box<dyn TextAnalyzer>>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, analyzer: impl TextAnalyzer + 'static) -> Self {
        self.analyzers.push(Box::new(analyzer));
        self
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Stops at the first analyzer error.
    pub fn run(&self, text: &str) -> Result<CombinedReport, AnalysisError> {
        let mut results = BTreeMap::new();
        for analyzer in &self.analyzers {
            debug!(analyzer = analyzer.name(), "running analyzer");
            results.insert(analyzer.name().to_string(), analyzer.analyze_text(text)?);
        }
        Ok(CombinedReport {
            generated_at: Utc::now(),
            results,
        })
    }
}
