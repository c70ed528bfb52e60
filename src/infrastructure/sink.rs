// SPDX-License-Identifier: MPL-2.0
//! Recording toast sink.
//!
//! Logs every request through `tracing` and keeps a journal of accepted
//! calls. Used by the demo binary in place of a platform notifier, and by
//! tests to assert on what the mirror asked for.

use crate::application::port::{ProgressData, SinkError, ToastNotification, ToastSink};
use crate::mirror::MirrorHandle;
use tracing::{debug, info};

/// One accepted sink request.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Show(ToastNotification),
    Update {
        tag: String,
        group: String,
        data: ProgressData,
    },
    Hide(ToastNotification),
    RemoveHistory {
        tag: String,
        group: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    failing: bool,
    handle: Option<MirrorHandle>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following request fail with [`SinkError::Unavailable`].
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    #[must_use]
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Returns and clears the journal.
    pub fn take_calls(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }

    /// Toasts passed to `show`, in order.
    #[must_use]
    pub fn shown(&self) -> Vec<&ToastNotification> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Show(toast) => Some(toast),
                _ => None,
            })
            .collect()
    }

    /// Progress data passed to `update`, in order.
    #[must_use]
    pub fn updates(&self) -> Vec<&ProgressData> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Update { data, .. } => Some(data),
                _ => None,
            })
            .collect()
    }

    /// Tags passed to `hide`, in order.
    #[must_use]
    pub fn hidden(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Hide(toast) => Some(toast.tag.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Tags passed to `remove_history`, in order.
    #[must_use]
    pub fn removed_from_history(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::RemoveHistory { tag, .. } => Some(tag.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Handle received through `connect`, used to simulate platform events.
    #[must_use]
    pub fn handle(&self) -> Option<&MirrorHandle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    fn record(&mut self, call: SinkCall) -> Result<(), SinkError> {
        if self.failing {
            return Err(SinkError::Unavailable);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl ToastSink for RecordingSink {
    fn show(&mut self, toast: &ToastNotification) -> Result<(), SinkError> {
        info!(
            tag = %toast.tag,
            priority = ?toast.priority,
            suppress_popup = toast.suppress_popup,
            text = toast.content.lines.first().map_or("", String::as_str),
            "show toast"
        );
        self.record(SinkCall::Show(toast.clone()))
    }

    fn update(&mut self, data: &ProgressData, tag: &str, group: &str) -> Result<(), SinkError> {
        info!(
            tag,
            value = %data.value_string,
            status = %data.status,
            sequence = data.sequence.value(),
            "update toast"
        );
        self.record(SinkCall::Update {
            tag: tag.to_string(),
            group: group.to_string(),
            data: data.clone(),
        })
    }

    fn hide(&mut self, toast: &ToastNotification) -> Result<(), SinkError> {
        info!(tag = %toast.tag, "hide toast");
        self.record(SinkCall::Hide(toast.clone()))
    }

    fn remove_history(&mut self, tag: &str, group: &str) -> Result<(), SinkError> {
        debug!(tag, group, "remove toast from history");
        self.record(SinkCall::RemoveHistory {
            tag: tag.to_string(),
            group: group.to_string(),
        })
    }

    fn connect(&mut self, handle: MirrorHandle) {
        self.handle = Some(handle);
    }

    fn disconnect(&mut self) {
        self.handle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{RenderedContent, ToastPriority};
    use std::sync::Arc;

    fn toast(tag: &str) -> ToastNotification {
        ToastNotification {
            tag: tag.to_string(),
            group: "group".to_string(),
            content: Arc::new(RenderedContent::default()),
            priority: ToastPriority::Default,
            suppress_popup: false,
            data: None,
            expires_on_reboot: false,
        }
    }

    #[test]
    fn records_accepted_calls_in_order() {
        let mut sink = RecordingSink::new();
        sink.show(&toast("a")).unwrap();
        sink.hide(&toast("a")).unwrap();
        sink.remove_history("a", "group").unwrap();

        assert_eq!(sink.calls().len(), 3);
        assert_eq!(sink.shown()[0].tag, "a");
        assert_eq!(sink.hidden(), vec!["a"]);
        assert_eq!(sink.removed_from_history(), vec!["a"]);
    }

    #[test]
    fn failing_sink_rejects_and_records_nothing() {
        let mut sink = RecordingSink::new();
        sink.set_failing(true);

        assert_eq!(sink.show(&toast("a")), Err(SinkError::Unavailable));
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn take_calls_clears_journal() {
        let mut sink = RecordingSink::new();
        sink.show(&toast("a")).unwrap();

        assert_eq!(sink.take_calls().len(), 1);
        assert!(sink.calls().is_empty());
    }
}
