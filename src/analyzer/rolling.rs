use crate::model::AnalysisError;
use std::num::NonZeroUsize;

/// A validated rolling window size (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window(NonZeroUsize);

impl Window {
    /// Five sentences.
    pub const DEFAULT: Window = Window(NonZeroUsize::new(5).unwrap());

    pub fn new(size: usize) -> Result<Self, AnalysisError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(AnalysisError::InvalidWindow(size))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Window {
    type Error = AnalysisError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Trailing moving average. Position `i` is the mean of
/// `series[i + 1 - window ..= i]`, shrinking at the start of the series.
/// The output always has the same length as the input.
pub fn roll(series: &[f64], window: Window) -> Vec<f64> {
    let window = window.get();
    if window == 1 {
        return series.to_vec();
    }

    (0..series.len())
        .map(|i| mean(&series[(i + 1).saturating_sub(window)..=i]))
        .collect()
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Largest value and the first index holding it; `(0.0, None)` when empty.
pub fn first_max(series: &[f64]) -> (f64, Option<usize>) {
    series
        .iter()
        .copied()
        .enumerate()
        .fold((0.0, None), |(best, at), (i, v)| match at {
            Some(_) if v <= best => (best, at),
            _ => (v, Some(i)),
        })
}
