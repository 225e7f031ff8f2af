use emotion_arc::{analyze, segment, AnalysisError, DEFAULT_WINDOW};
use proptest::prelude::*;

const CHAPTER: &str = "
    Sarah walked into the coffee shop with excitement. She was happy and delighted.
    But then she felt sad and disappointed when she realized her mistake.
    Fear crept in as she worried about being late.
    Finally, relief washed over her when she saw the bookstore.
    Joy returned as she quickened her pace with anticipation.
";

fn narrative() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "happy", "sad", "fear", "trust", "hope", "rage", "the", "door", "Mr", "calm", "tears",
        "sudden", "don't", "self-made", "3", "",
    ]);
    let punct = prop::sample::select(vec![" ", " ", ". ", "! ", "?? ", "...", ", ", "\n"]);
    prop::collection::vec((word, punct), 0..60)
        .prop_map(|parts| parts.into_iter().map(|(w, p)| format!("{w}{p}")).collect())
}

proptest! {
    #[test]
    fn sentence_count_matches_segmenter(text in narrative(), window in 1usize..12) {
        let result = analyze(&text, window).unwrap();
        prop_assert_eq!(result.sentences.len(), segment(&text).len());
        prop_assert_eq!(result.summary.sentence_count, result.sentences.len());
    }

    #[test]
    fn rolling_series_keep_length(text in narrative(), window in 1usize..12) {
        let result = analyze(&text, window).unwrap();
        prop_assert_eq!(result.valence_rolling.len(), result.sentences.len());
        for series in result.emotions_rolling.values() {
            prop_assert_eq!(series.len(), result.sentences.len());
        }
    }

    #[test]
    fn analysis_is_deterministic(text in narrative(), window in 1usize..12) {
        prop_assert_eq!(analyze(&text, window).unwrap(), analyze(&text, window).unwrap());
    }

    #[test]
    fn window_of_one_is_unsmoothed(text in narrative()) {
        let result = analyze(&text, 1).unwrap();
        let raw = result.valence_raw();
        prop_assert_eq!(result.valence_rolling, raw);
    }

    #[test]
    fn rolling_stays_within_raw_bounds(text in narrative(), window in 1usize..12) {
        let result = analyze(&text, window).unwrap();
        let raw = result.valence_raw();
        let lo = raw.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for v in &result.valence_rolling {
            prop_assert!(*v >= lo - 1e-9 && *v <= hi + 1e-9);
        }
    }
}

#[test]
fn empty_text_is_zeroed_not_an_error() {
    for text in ["", "   ", "\n\t\r\n"] {
        let result = analyze(text, DEFAULT_WINDOW).unwrap();
        assert_eq!(result.summary.sentence_count, 0);
        assert_eq!(result.summary.avg_valence, 0.0);
        assert!(result.sentences.is_empty());
        assert!(result.valence_rolling.is_empty());
        assert!(result.emotions_rolling.values().all(Vec::is_empty));
        assert_eq!(result.summary.top_emotions.len(), 3);
    }
}

#[test]
fn happy_then_sad_averages_to_zero() {
    let result = analyze("I am happy. I am sad.", DEFAULT_WINDOW).unwrap();
    assert_eq!(result.sentences.len(), 2);
    assert!(result.sentences[0].valence_raw > 0);
    assert_eq!(result.sentences[0].emotions_raw["joy"], 1);
    assert!(result.sentences[1].valence_raw < 0);
    assert_eq!(result.sentences[1].emotions_raw["sadness"], 1);
    assert_eq!(result.summary.avg_valence, 0.0);
}

#[test]
fn full_window_ends_at_document_mean() {
    let first = analyze(CHAPTER, 1).unwrap();
    let n = first.sentences.len();
    assert_eq!(n, 6);

    let result = analyze(CHAPTER, n).unwrap();
    let raw = result.valence_raw();
    let mean = raw.iter().sum::<f64>() / n as f64;
    assert_eq!(result.valence_rolling[n - 1], mean);
    assert_eq!(result.valence_rolling[n - 1], result.summary.avg_valence);
}

#[test]
fn sentence_without_lexicon_words_scores_zero() {
    let result = analyze("The table has four legs.", 3).unwrap();
    let sentence = &result.sentences[0];
    assert_eq!(sentence.valence_raw, 0);
    assert!(sentence.emotions_raw.values().all(|&c| c == 0));
}

#[test]
fn punctuation_only_text_does_not_fail() {
    let result = analyze("!@#$%^&*().,;:", 3).unwrap();
    assert!(result.sentences.iter().all(|s| s.valence_raw == 0));
}

#[test]
fn chapter_detects_joy() {
    let result = analyze(CHAPTER, DEFAULT_WINDOW).unwrap();
    assert!(result.summary.top_emotions.contains(&"joy".to_string()));
    let total: u32 = result
        .sentences
        .iter()
        .flat_map(|s| s.emotions_raw.values())
        .sum();
    assert!(total > 0);
}

#[test]
fn zero_window_is_rejected() {
    assert!(matches!(analyze(CHAPTER, 0), Err(AnalysisError::InvalidWindow(0))));
}

#[test]
fn concurrent_calls_agree() {
    let expected = analyze(CHAPTER, 2).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| analyze(CHAPTER, 2).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
