//! Lexicon store: polarity word sets plus an ordered list of emotion categories.
//!
//! The lexicon is plain data. Adding or removing a category means changing the
//! data passed to [`Lexicon::new`], never the lookup code.

use crate::model::LexiconError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub const POSITIVE: &str = "positive";
pub const NEGATIVE: &str = "negative";

const DEFAULT_POSITIVE: &[&str] = &[
    "joy", "love", "glad", "hope", "delight", "cheer", "smile", "trust", "safe", "calm",
    "relief", "brave", "confident", "win", "happy", "pleased", "laugh", "grin", "joyful",
];

const DEFAULT_NEGATIVE: &[&str] = &[
    "sad", "angry", "anger", "fear", "afraid", "terror", "panic", "hurt", "bleed", "pain",
    "cry", "fail", "lose", "danger", "threat", "sorrow", "gloom", "mourn", "tears", "grief",
    "lonely",
];

const DEFAULT_EMOTIONS: &[(&str, &[&str])] = &[
    ("joy", &["joy", "delight", "happy", "glad", "smile", "cheer", "pleased", "laugh", "grin"]),
    ("sadness", &["sad", "sorrow", "gloom", "mourn", "cry", "tears", "grief", "lonely"]),
    ("anger", &["anger", "angry", "rage", "fury", "irritate", "annoyed", "hate", "jealous"]),
    ("fear", &["fear", "afraid", "scare", "terror", "panic", "anxiety", "dread", "threat"]),
    ("trust", &["trust", "safe", "secure", "faith", "reliance", "certain"]),
    ("disgust", &["disgust", "gross", "nausea", "repulse", "vile", "filthy", "revolt"]),
    ("surprise", &["surprise", "shock", "startle", "astonish", "sudden", "unexpected"]),
    ("anticipation", &["anticipate", "eager", "expect", "await", "hope", "yearn", "ready"]),
];

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::build(LexiconData::default()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Serialized form of a lexicon, as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconData {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub emotions: Vec<EmotionData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionData {
    pub name: String,
    pub words: Vec<String>,
}

impl Default for LexiconData {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            positive: owned(DEFAULT_POSITIVE),
            negative: owned(DEFAULT_NEGATIVE),
            emotions: DEFAULT_EMOTIONS
                .iter()
                .map(|(name, words)| EmotionData {
                    name: name.to_string(),
                    words: owned(words),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
struct EmotionCategory {
    name: String,
    words: HashSet<String>,
}

/// Immutable category -> word-set lookup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    emotions: Vec<EmotionCategory>,
}

impl Lexicon {
    /// Validates the data and builds a lexicon from it.
    pub fn new(data: LexiconData) -> Result<Self, LexiconError> {
        let lexicon = Self::build(data);

        if let Some(word) = lexicon.positive.intersection(&lexicon.negative).min() {
            return Err(LexiconError::OverlappingPolarity(word.clone()));
        }

        let mut seen = HashSet::new();
        for category in &lexicon.emotions {
            if category.name.is_empty() {
                return Err(LexiconError::EmptyCategoryName);
            }
            if category.name == POSITIVE || category.name == NEGATIVE {
                return Err(LexiconError::ReservedCategoryName(category.name.clone()));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(LexiconError::DuplicateCategory(category.name.clone()));
            }
        }

        Ok(lexicon)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let data: LexiconData = serde_json::from_str(json)?;
        Self::new(data)
    }

    /// Loads a lexicon from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The built-in lexicon, shared by the whole process.
    pub fn default_ref() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    fn build(data: LexiconData) -> Self {
        let fold = |words: Vec<String>| -> HashSet<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };

        Self {
            positive: fold(data.positive),
            negative: fold(data.negative),
            emotions: data
                .emotions
                .into_iter()
                .map(|e| EmotionCategory {
                    name: e.name.trim().to_string(),
                    words: fold(e.words),
                })
                .collect(),
        }
    }

    pub fn polarity(&self, token: &str) -> Option<Polarity> {
        if self.positive.contains(token) {
            Some(Polarity::Positive)
        } else if self.negative.contains(token) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    /// Positions (in category order) of every emotion the token belongs to.
    pub fn emotion_hits<'a>(&'a self, token: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.emotions
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.words.contains(token))
            .map(|(i, _)| i)
    }

    /// Emotion category names in lexicon order.
    pub fn emotion_names(&self) -> impl Iterator<Item = &str> {
        self.emotions.iter().map(|c| c.name.as_str())
    }

    pub fn emotion_count(&self) -> usize {
        self.emotions.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}
