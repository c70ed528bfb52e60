// SPDX-License-Identifier: MPL-2.0
//! Event inbox marshaling platform callbacks onto the logic thread.
//!
//! Platform callbacks (activation, dismissal, feed refresh, finished content
//! builds) may fire on any thread. They never touch mirror state directly:
//! they post a [`MirrorEvent`] through a [`MirrorHandle`], and the mirror
//! drains the inbox at the start of every tick.
//!
//! The inbox never drops work. Only refresh signals are coalesced, since one
//! pending refresh already covers any later one.

use crate::application::port::{DismissReason, ToastContent};
use crate::domain::toast::ToastId;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Work posted to the logic thread.
#[derive(Debug)]
pub enum MirrorEvent {
    /// The feed's membership may have changed.
    FeedRefreshed,
    /// A toast body or button was activated with this argument string.
    Activated(String),
    Dismissed(ToastId, DismissReason),
    /// The platform failed to show a toast.
    Failed(ToastId),
    /// A deferred content build finished.
    ContentReady(ToastId, ToastContent),
}

/// Handle for posting events to the mirror.
///
/// This handle is cheap to clone and can be shared across threads.
/// Posting never blocks. A backlog reaching the inbox capacity is logged,
/// but the events are still delivered.
#[derive(Clone, Debug)]
pub struct MirrorHandle {
    event_tx: Sender<MirrorEvent>,
    refresh_pending: Arc<AtomicBool>,
    capacity: usize,
}

impl MirrorHandle {
    /// Requests a reconciliation. Collapses into a refresh already queued.
    pub fn feed_refreshed(&self) {
        if self.refresh_pending.swap(true, Ordering::AcqRel) {
            return;
        }
        self.post(MirrorEvent::FeedRefreshed);
    }

    pub fn activated(&self, argument: impl Into<String>) {
        self.post(MirrorEvent::Activated(argument.into()));
    }

    pub fn dismissed(&self, toast: ToastId, reason: DismissReason) {
        self.post(MirrorEvent::Dismissed(toast, reason));
    }

    pub fn failed(&self, toast: ToastId) {
        self.post(MirrorEvent::Failed(toast));
    }

    pub fn content_ready(&self, toast: ToastId, content: ToastContent) {
        self.post(MirrorEvent::ContentReady(toast, content));
    }

    fn post(&self, event: MirrorEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::debug!("mirror gone, dropping event");
            return;
        }
        let backlog = self.event_tx.len();
        if backlog == self.capacity {
            tracing::warn!(backlog, "mirror inbox backlog reached its capacity");
        }
    }
}

/// Receiving side, owned by the mirror.
#[derive(Debug)]
pub(crate) struct Inbox {
    event_rx: Receiver<MirrorEvent>,
    event_tx: Sender<MirrorEvent>,
    refresh_pending: Arc<AtomicBool>,
    capacity: usize,
}

impl Inbox {
    pub(crate) fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            event_rx,
            event_tx,
            refresh_pending: Arc::new(AtomicBool::new(false)),
            capacity: capacity.max(1),
        }
    }

    pub(crate) fn handle(&self) -> MirrorHandle {
        MirrorHandle {
            event_tx: self.event_tx.clone(),
            refresh_pending: Arc::clone(&self.refresh_pending),
            capacity: self.capacity,
        }
    }

    /// Takes every event posted so far.
    ///
    /// Events posted while the batch is being processed wait for the next drain.
    pub(crate) fn drain(&self) -> Vec<MirrorEvent> {
        // Cleared first so a refresh posted during the drain is queued again.
        self.refresh_pending.store(false, Ordering::Release);
        self.event_rx.try_iter().collect()
    }

    pub(crate) fn pending(&self) -> usize {
        self.event_rx.len()
    }
}
