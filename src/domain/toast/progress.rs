// SPDX-License-Identifier: MPL-2.0
//! Progress snapshot value types.

use crate::domain::notification::ProgressState;

/// Minimum change in progress value that warrants pushing an update.
pub const PROGRESS_EPSILON: f64 = 0.001;

/// Progress fraction, guaranteed to be within `0.0..=1.0`.
///
/// Non-finite inputs collapse to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressValue(f64);

impl ProgressValue {
    /// Creates a new progress value, clamping to the valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns whether the two values are further apart than [`PROGRESS_EPSILON`].
    #[must_use]
    pub fn differs_from(self, other: Self) -> bool {
        (self.0 - other.0).abs() > PROGRESS_EPSILON
    }

    /// Formats the value as a whole percentage, e.g. `"40%"`.
    #[must_use]
    pub fn percent_string(self) -> String {
        format!("{:.0}%", self.0 * 100.0)
    }
}

impl From<f32> for ProgressValue {
    fn from(value: f32) -> Self {
        Self::new(f64::from(value))
    }
}

/// Per-toast counter distinguishing successive progress pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct SequenceNumber(u32);

impl SequenceNumber {
    /// The sequence number carried by the initial display.
    pub const INITIAL: Self = Self(0);

    /// Returns the raw counter.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the following sequence number.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Human-readable status line for a progress state.
#[must_use]
pub fn status_label(state: ProgressState) -> &'static str {
    match state {
        ProgressState::Queued => "Queued",
        ProgressState::Active => "In progress",
        ProgressState::Completed => "Completed",
        ProgressState::Cancelled => "Cancelled",
        ProgressState::Other => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn clamps_into_unit_range() {
        assert_abs_diff_eq!(ProgressValue::new(-0.5).value(), 0.0);
        assert_abs_diff_eq!(ProgressValue::new(1.7).value(), 1.0);
        assert_abs_diff_eq!(ProgressValue::new(0.25).value(), 0.25);
    }

    #[test]
    fn nan_collapses_to_zero() {
        assert_abs_diff_eq!(ProgressValue::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn small_changes_are_within_epsilon() {
        let a = ProgressValue::new(0.40);
        assert!(!a.differs_from(ProgressValue::new(0.4005)));
        assert!(a.differs_from(ProgressValue::new(0.403)));
        assert!(a.differs_from(ProgressValue::new(0.52)));
    }

    #[test]
    fn percent_string_rounds() {
        assert_eq!(ProgressValue::new(0.404).percent_string(), "40%");
        assert_eq!(ProgressValue::new(1.0).percent_string(), "100%");
    }

    #[test]
    fn sequence_increments() {
        let seq = SequenceNumber::INITIAL;
        assert_eq!(seq.next().value(), 1);
        assert!(seq.next() > seq);
    }

    #[test]
    fn status_labels_match_states() {
        assert_eq!(status_label(ProgressState::Queued), "Queued");
        assert_eq!(status_label(ProgressState::Active), "In progress");
        assert_eq!(status_label(ProgressState::Completed), "Completed");
        assert_eq!(status_label(ProgressState::Cancelled), "Cancelled");
        assert_eq!(status_label(ProgressState::Other), "");
    }
}
