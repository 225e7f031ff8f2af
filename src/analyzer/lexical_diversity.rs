use crate::analyzer::TextAnalyzer;
use crate::model::AnalysisError;
use crate::text::tokenize;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Moving-window size in tokens.
pub const DEFAULT_TTR_WINDOW: usize = 200;

/// MTLD factor threshold.
const MTLD_THRESHOLD: f64 = 0.72;

const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "of", "to", "in", "on", "for",
    "with", "as", "at", "by", "from", "that", "this", "it", "is", "was", "were", "be", "been",
    "are", "am", "i", "you", "he", "she", "they", "we", "my", "your", "his", "her", "their",
    "our", "not", "no", "so", "do", "did", "does", "have", "has", "had", "there", "here", "when",
    "where", "why", "how", "what", "which", "who", "whom", "whose",
];

/// Vocabulary range and repetition metrics of a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalReport {
    pub tokens: usize,
    pub types: usize,
    pub hapax: usize,
    pub dis_legomena: usize,
    pub ttr: f64,
    pub root_ttr: f64,
    pub herdan_c: f64,
    pub maas_a: f64,
    pub mtld: f64,
    pub window_ttr_min: f64,
    pub window_ttr_avg: f64,
    pub window_ttr_max: f64,
    pub content_ratio: f64,
}

pub struct LexicalDiversityAnalyzer {
    window: usize,
}

impl LexicalDiversityAnalyzer {
    pub fn new(window: usize) -> Result<Self, AnalysisError> {
        if window == 0 {
            return Err(AnalysisError::InvalidWindow(window));
        }
        Ok(Self { window })
    }

    pub fn report(&self, text: &str) -> LexicalReport {
        let words = tokenize(text);
        let n = words.len();

        let mut freq: HashMap<&str, usize> = HashMap::new();
        for w in &words {
            *freq.entry(w.as_str()).or_default() += 1;
        }
        let v = freq.len();
        let hapax = freq.values().filter(|&&f| f == 1).count();
        let dis_legomena = freq.values().filter(|&&f| f == 2).count();

        let ln_n = (n.max(1) as f64).ln();
        let ln_v = (v.max(1) as f64).ln();

        let window = moving_ttr(&words, self.window);
        let (window_ttr_min, window_ttr_avg, window_ttr_max) = if window.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let min = window.iter().copied().fold(f64::INFINITY, f64::min);
            let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (min, window.iter().sum::<f64>() / window.len() as f64, max)
        };

        let content = words
            .iter()
            .filter(|w| !FUNCTION_WORDS.contains(&w.as_str()))
            .count();

        LexicalReport {
            tokens: n,
            types: v,
            hapax,
            dis_legomena,
            ttr: safe_div(v as f64, n as f64),
            root_ttr: safe_div(v as f64, (n.max(1) as f64).sqrt()),
            herdan_c: safe_div(ln_v, ln_n),
            maas_a: safe_div(ln_n - ln_v, ln_n * ln_n),
            mtld: approx_mtld(&words),
            window_ttr_min,
            window_ttr_avg,
            window_ttr_max,
            content_ratio: safe_div(content as f64, n as f64),
        }
    }
}

impl TextAnalyzer for LexicalDiversityAnalyzer {
    fn name(&self) -> &str {
        "lexical_diversity"
    }

    fn analyze_text(&self, text: &str) -> Result<serde_json::Value, AnalysisError> {
        Ok(serde_json::json!({
            "window": self.window,
            "result": self.report(text),
        }))
    }
}

fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 { 0.0 } else { a / b }
}

/// TTR of every full window; a text shorter than the window yields one value.
fn moving_ttr(words: &[String], window: usize) -> Vec<f64> {
    if words.is_empty() {
        return Vec::new();
    }
    if words.len() < window {
        let types: HashSet<&String> = words.iter().collect();
        return vec![types.len() as f64 / words.len() as f64];
    }
    words
        .windows(window)
        .map(|seg| seg.iter().collect::<HashSet<_>>().len() as f64 / window as f64)
        .collect()
}

/// Forward-only MTLD: mean length of runs whose TTR stays above the threshold.
fn approx_mtld(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let mut factors = 0.0;
    let mut types: HashSet<&str> = HashSet::new();
    let mut count = 0usize;
    let mut ttr = 1.0;

    for w in words {
        count += 1;
        types.insert(w.as_str());
        ttr = types.len() as f64 / count as f64;
        if ttr <= MTLD_THRESHOLD {
            factors += 1.0;
            types.clear();
            count = 0;
        }
    }

    if count > 0 {
        factors += (ttr - MTLD_THRESHOLD) / (1.0 - MTLD_THRESHOLD);
    }

    words.len() as f64 / f64::max(factors, 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let report = LexicalDiversityAnalyzer::new(200)
            .unwrap()
            .report("the cat saw the dog and the dog ran");
        assert_eq!(report.tokens, 9);
        assert_eq!(report.types, 6);
        // cat, saw, and, ran
        assert_eq!(report.hapax, 4);
        // dog
        assert_eq!(report.dis_legomena, 1);
        assert!((report.ttr - 6.0 / 9.0).abs() < 1e-12);
        assert!((report.root_ttr - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let report = LexicalDiversityAnalyzer::new(10).unwrap().report("");
        assert_eq!(report.tokens, 0);
        assert_eq!(report.ttr, 0.0);
        assert_eq!(report.herdan_c, 0.0);
        assert_eq!(report.maas_a, 0.0);
        assert_eq!(report.mtld, 0.0);
        assert_eq!(report.window_ttr_max, 0.0);
        assert_eq!(report.content_ratio, 0.0);
    }

    #[test]
    fn test_moving_window() {
        let words: Vec<String> = ["a", "a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(moving_ttr(&words, 2), vec![0.5, 1.0, 1.0]);
        assert_eq!(moving_ttr(&words, 10), vec![0.75]);
    }

    #[test]
    fn test_content_ratio() {
        let report = LexicalDiversityAnalyzer::new(5).unwrap().report("the storm and the sea");
        assert!((report.content_ratio - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_mtld_of_repetition_is_short() {
        let repetitive = LexicalDiversityAnalyzer::new(5).unwrap().report(&"go ".repeat(20));
        let varied = LexicalDiversityAnalyzer::new(5)
            .unwrap()
            .report("every single word here differs from all the others present");
        assert!(repetitive.mtld < varied.mtld);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(LexicalDiversityAnalyzer::new(0).is_err());
    }
}
