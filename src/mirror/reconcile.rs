// SPDX-License-Identifier: MPL-2.0
//! Generation diff of feed membership.
//!
//! Each reconciliation swaps the two generation buffers and rebuilds the
//! current one from a full feed snapshot, so out-of-order feed mutations
//! between refreshes never leave the mirror with a stale view.

use crate::domain::notification::SourceId;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
struct Generation {
    order: Vec<SourceId>,
    members: HashSet<SourceId>,
}

impl Generation {
    fn rebuild(&mut self, snapshot: impl IntoIterator<Item = SourceId>) {
        self.order.clear();
        self.members.clear();
        for id in snapshot {
            if self.members.insert(id) {
                self.order.push(id);
            }
        }
    }
}

/// Membership changes between two consecutive snapshots.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MembershipDiff {
    /// Newly present notifications, in feed enumeration order.
    pub appeared: Vec<SourceId>,
    /// Notifications gone since the previous snapshot, in their previous order.
    pub disappeared: Vec<SourceId>,
}

impl MembershipDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.appeared.is_empty() && self.disappeared.is_empty()
    }
}

/// Double-buffered set of seen notification identities.
#[derive(Debug, Default)]
pub struct GenerationDiff {
    previous: Generation,
    current: Generation,
}

impl GenerationDiff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the current generation the previous one, rebuilds the current
    /// one from `snapshot` and reports what changed.
    pub fn advance(&mut self, snapshot: impl IntoIterator<Item = SourceId>) -> MembershipDiff {
        std::mem::swap(&mut self.previous, &mut self.current);
        self.current.rebuild(snapshot);

        let appeared = self
            .current
            .order
            .iter()
            .filter(|id| !self.previous.members.contains(*id))
            .copied()
            .collect();
        let disappeared = self
            .previous
            .order
            .iter()
            .filter(|id| !self.current.members.contains(*id))
            .copied()
            .collect();

        MembershipDiff {
            appeared,
            disappeared,
        }
    }

    /// Whether `id` was part of the latest snapshot.
    #[must_use]
    pub fn is_current(&self, id: SourceId) -> bool {
        self.current.members.contains(&id)
    }

    /// Latest snapshot in feed order.
    #[must_use]
    pub fn current(&self) -> &[SourceId] {
        &self.current.order
    }
}
