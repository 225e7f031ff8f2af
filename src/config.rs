use crate::analyzer::lexical_diversity::DEFAULT_TTR_WINDOW;
use crate::analyzer::{DEFAULT_TOP_N, DEFAULT_WINDOW};
use crate::lexicon::Lexicon;
use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rolling window in sentences.
    pub window: usize,
    /// Length of `top_emotions`.
    pub top_n: usize,
    /// Upper bound on input length in characters; unlimited when absent.
    pub max_text_length: Option<usize>,
    /// Moving TTR window in tokens for lexical diversity.
    pub lexical_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            top_n: DEFAULT_TOP_N,
            max_text_length: None,
            lexical_window: DEFAULT_TTR_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    /// JSON lexicon replacing the built-in one.
    pub lexicon_path: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.window == 0 {
            return Err(ConfigError::Invalid("window must be a positive integer".into()));
        }
        if self.analysis.lexical_window == 0 {
            return Err(ConfigError::Invalid("lexical_window must be a positive integer".into()));
        }
        if self.analysis.max_text_length == Some(0) {
            return Err(ConfigError::Invalid("max_text_length must be positive when set".into()));
        }
        Ok(())
    }

    /// The configured lexicon, or the built-in one.
    pub fn lexicon(&self) -> Result<Arc<Lexicon>, ConfigError> {
        match &self.lexicon_path {
            Some(path) => Ok(Arc::new(Lexicon::load(path)?)),
            None => Ok(Arc::new(Lexicon::default())),
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
