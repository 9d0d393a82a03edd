use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("pass threshold must be between 0 and 100, got {0}")]
    OutOfRange(u32),
}

/// Minimum percentage needed to pass a quiz, in `0..=100`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PassThreshold(u8);

impl PassThreshold {
    pub const DEFAULT_PERCENT: u8 = 70;

    /// # Errors
    ///
    /// Returns `ThresholdError::OutOfRange` for values above 100.
    pub fn new(percent: u32) -> Result<Self, ThresholdError> {
        match u8::try_from(percent) {
            Ok(value) if value <= 100 => Ok(Self(value)),
            _ => Err(ThresholdError::OutOfRange(percent)),
        }
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_met_by(self, percentage: u8) -> bool {
        percentage >= self.0
    }
}

impl Default for PassThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

impl fmt::Debug for PassThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PassThreshold({}%)", self.0)
    }
}

impl fmt::Display for PassThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Outcome of scoring one submitted answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    percentage: u8,
    passed: bool,
    correct: u32,
    total: u32,
}

impl ScoreResult {
    /// Builds a result from raw counts.
    ///
    /// `percentage` is `correct / total * 100` rounded half up; an empty quiz
    /// scores 0. `passed` is exactly `percentage >= threshold`.
    #[must_use]
    pub fn from_counts(correct: u32, total: u32, threshold: PassThreshold) -> Self {
        let correct = correct.min(total);
        let percentage = round_half_up_percent(correct, total);
        Self {
            percentage,
            passed: threshold.is_met_by(percentage),
            correct,
            total,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

/// `round(part / whole * 100)` with halves rounded up, in integer arithmetic.
///
/// Returns 0 when `whole` is 0. `part` is expected to be `<= whole`.
#[must_use]
pub fn round_half_up_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part.min(whole));
    let whole = u64::from(whole);
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_default_is_seventy() {
        assert_eq!(PassThreshold::default().percent(), 70);
        assert_eq!(PassThreshold::default().to_string(), "70%");
    }

    #[test]
    fn threshold_rejects_above_hundred() {
        assert_eq!(
            PassThreshold::new(101).unwrap_err(),
            ThresholdError::OutOfRange(101)
        );
        assert_eq!(
            PassThreshold::new(1_000).unwrap_err(),
            ThresholdError::OutOfRange(1_000)
        );
        assert_eq!(PassThreshold::new(100).unwrap().percent(), 100);
        assert_eq!(PassThreshold::new(0).unwrap().percent(), 0);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up_percent(2, 3), 67);
        assert_eq!(round_half_up_percent(1, 3), 33);
        assert_eq!(round_half_up_percent(1, 8), 13); // 12.5
        assert_eq!(round_half_up_percent(1, 200), 1); // 0.5
        assert_eq!(round_half_up_percent(3, 3), 100);
        assert_eq!(round_half_up_percent(0, 0), 0);
    }

    #[test]
    fn from_counts_clamps_correct_to_total() {
        let result = ScoreResult::from_counts(5, 3, PassThreshold::default());
        assert_eq!(result.correct(), 3);
        assert_eq!(result.percentage(), 100);
        assert!(result.passed());
    }

    #[test]
    fn pass_is_inclusive_at_threshold() {
        let threshold = PassThreshold::new(50).unwrap();
        let result = ScoreResult::from_counts(1, 2, threshold);
        assert_eq!(result.percentage(), 50);
        assert!(result.passed());
    }
}
