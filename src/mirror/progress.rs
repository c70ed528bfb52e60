// SPDX-License-Identifier: MPL-2.0
//! Per-toast progress sequencing.
//!
//! A [`ProgressTracker`] remembers the last progress snapshot pushed to the
//! sink and decides whether a new reading is worth another push. Every push
//! gets the next [`SequenceNumber`] so the platform can discard stale updates.

use crate::application::port::ProgressData;
use crate::domain::notification::{ProgressReport, ProgressState};
use crate::domain::toast::{status_label, ProgressValue, SequenceNumber};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Snapshot {
    value: ProgressValue,
    state: ProgressState,
}

/// Progress state of one toast.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    sequence: SequenceNumber,
    last: Option<Snapshot>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the most recent push (`0` before the first one).
    #[must_use]
    pub fn sequence(&self) -> SequenceNumber {
        self.sequence
    }

    /// Last pushed value, `None` until the first push.
    #[must_use]
    pub fn last_value(&self) -> Option<ProgressValue> {
        self.last.map(|s| s.value)
    }

    #[must_use]
    pub fn last_state(&self) -> Option<ProgressState> {
        self.last.map(|s| s.state)
    }

    /// Whether `report` differs enough from the last push to warrant an update.
    #[must_use]
    pub fn requires_update(&self, report: &ProgressReport) -> bool {
        let value = ProgressValue::from(report.value);
        match self.last {
            None => true,
            Some(last) => last.value.differs_from(value) || last.state != report.state,
        }
    }

    /// Records `report` and returns the data to push, or `None` when the
    /// reading is within epsilon of the last push with an unchanged state.
    pub fn observe(&mut self, report: &ProgressReport) -> Option<ProgressData> {
        if !self.requires_update(report) {
            return None;
        }

        let value = ProgressValue::from(report.value);
        self.sequence = self.sequence.next();
        self.last = Some(Snapshot {
            value,
            state: report.state,
        });

        Some(progress_data(value, report.state, self.sequence))
    }

    /// Forgets the last pushed snapshot after the push failed, so the next
    /// reading is pushed again. The sequence keeps increasing.
    pub fn forget_last(&mut self) {
        self.last = None;
    }

    /// Data carried by a (re-)display of the toast.
    ///
    /// Uses the last pushed snapshot when there is one, the live `report`
    /// otherwise. Does not advance the sequence.
    #[must_use]
    pub fn display_data(&self, report: Option<&ProgressReport>) -> Option<ProgressData> {
        match (self.last, report) {
            (Some(last), _) => Some(progress_data(last.value, last.state, self.sequence)),
            (None, Some(report)) => Some(progress_data(
                ProgressValue::from(report.value),
                report.state,
                self.sequence,
            )),
            (None, None) => None,
        }
    }
}

fn progress_data(
    value: ProgressValue,
    state: ProgressState,
    sequence: SequenceNumber,
) -> ProgressData {
    ProgressData {
        value,
        value_string: value.percent_string(),
        status: status_label(state).to_string(),
        sequence,
    }
}
