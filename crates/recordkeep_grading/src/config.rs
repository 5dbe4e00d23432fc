//! Grading configuration.

use std::ops::RangeInclusive;

/// Configuration for importing and reporting student scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingConfig {
    /// Minimum score counted as a pass.
    pub pass_threshold: i32,

    /// Scores outside this range produce a warning. They are never rejected.
    pub score_range: RangeInclusive<i32>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 50,
            score_range: 0..=100,
        }
    }
}

impl GradingConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pass threshold.
    #[must_use]
    pub fn pass_threshold(mut self, threshold: i32) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Sets the range of scores accepted without a warning.
    #[must_use]
    pub fn score_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.score_range = range;
        self
    }
}
