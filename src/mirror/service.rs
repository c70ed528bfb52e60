// SPDX-License-Identifier: MPL-2.0
//! The toast mirror: ingress surface and orchestration of the core.
//!
//! `ToastMirror` owns the toast store, the action registry, the generation
//! diff and the default lane, and drives the three collaborator ports. All
//! of its methods run on a single logic thread; platform callbacks reach it
//! through a [`MirrorHandle`] and are drained at the start of each tick.

use super::actions::ActionRegistry;
use super::arguments::ToastArguments;
use super::default_lane::{DefaultLane, LaneContext, LaneEffect};
use super::inbox::{Inbox, MirrorEvent, MirrorHandle};
use super::presentation::{MirrorSettings, PresentationMode};
use super::reconcile::GenerationDiff;
use super::store::{ToastRecord, ToastStore};
use crate::application::port::{
    BuildOutcome, ButtonActivation, ContentBuilder, DismissReason, NotificationFeed,
    RenderedButton, RenderedContent, ToastContent, ToastNotification, ToastPriority, ToastSink,
};
use crate::domain::notification::{Callback, Notification, SourceId};
use crate::domain::toast::{ActionId, Scenario, ToastId};
use std::collections::{HashMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Mirrors a notification feed onto a toast sink.
///
/// # Example
///
/// ```
/// use toast_mirror::infrastructure::{InMemoryFeed, RecordingSink, StandardContentBuilder};
/// use toast_mirror::domain::notification::{Notification, SourceId};
/// use toast_mirror::mirror::{MirrorSettings, ToastMirror};
/// use std::time::Instant;
///
/// let mut mirror = ToastMirror::new(
///     InMemoryFeed::new(),
///     RecordingSink::new(),
///     StandardContentBuilder::new(),
///     MirrorSettings::default(),
/// );
///
/// mirror.feed_mut().push(Notification::new(SourceId::new(1), "Download finished"));
/// mirror.on_tick(Instant::now());
///
/// assert_eq!(mirror.sink().shown().len(), 1);
/// ```
pub struct ToastMirror<F, S, B>
where
    F: NotificationFeed,
    S: ToastSink,
    B: ContentBuilder,
{
    feed: F,
    sink: S,
    builder: B,
    settings: MirrorSettings,
    store: ToastStore,
    actions: ActionRegistry,
    diff: GenerationDiff,
    lane: DefaultLane,
    inbox: Inbox,
    presentation: PresentationMode,
    now: Instant,
    last_unread: Option<usize>,
    connected: bool,
}

impl<F, S, B> ToastMirror<F, S, B>
where
    F: NotificationFeed,
    S: ToastSink,
    B: ContentBuilder,
{
    /// Creates a mirror and subscribes it to the sink's platform events.
    pub fn new(feed: F, sink: S, builder: B, settings: MirrorSettings) -> Self {
        let inbox = Inbox::new(settings.inbox_capacity);
        let lane = DefaultLane::new(settings.dwell);
        let mut mirror = Self {
            feed,
            sink,
            builder,
            settings,
            store: ToastStore::new(),
            actions: ActionRegistry::new(),
            diff: GenerationDiff::new(),
            lane,
            inbox,
            presentation: PresentationMode::default(),
            now: Instant::now(),
            last_unread: None,
            connected: false,
        };
        mirror.start();
        mirror
    }

    /// Subscribes to platform events. `new` already does this; only needed
    /// again after [`shutdown`](Self::shutdown).
    pub fn start(&mut self) {
        if self.connected {
            return;
        }
        self.sink.connect(self.inbox.handle());
        self.connected = true;
        debug!(group = %self.settings.toast_group, "toast mirror started");
    }

    /// Unsubscribes from platform events. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if !self.connected {
            return;
        }
        self.sink.disconnect();
        self.connected = false;
        debug!("toast mirror stopped");
    }

    /// Handle for posting platform events from any thread.
    #[must_use]
    pub fn handle(&self) -> MirrorHandle {
        self.inbox.handle()
    }

    /// Reconciles the toasts with the feed's current membership.
    pub fn on_feed_refresh(&mut self) {
        self.reconcile();
    }

    /// Runs one update cycle.
    ///
    /// Pending platform events are drained first; the feed is reconciled when
    /// a refresh was requested or its unread count changed; then progress
    /// toasts are updated and the default lane gets its dwell check.
    pub fn on_tick(&mut self, now: Instant) {
        self.now = now;

        let mut refresh = self.drain_events();

        let unread = self.feed.unread_count();
        if self.last_unread != Some(unread) {
            self.last_unread = Some(unread);
            refresh = true;
        }
        if refresh {
            self.reconcile();
        }

        self.process_progress();

        let effects = self.lane.process(self.now);
        self.apply(effects);
    }

    /// Routes an activation argument string to its registered action.
    ///
    /// Unknown or malformed identifiers are ignored. After the action ran,
    /// its toast is shown again if it asked to stay on screen, and retired
    /// otherwise.
    pub fn on_activated(&mut self, argument: &str) {
        let Some(action_id) = ToastArguments::parse(argument).action_id() else {
            debug!(argument, "activation without a usable action id");
            return;
        };
        let Some(action) = self.actions.resolve(action_id) else {
            debug!(%action_id, "ignoring activation of unknown action");
            return;
        };

        if panic::catch_unwind(AssertUnwindSafe(|| (action.callback)())).is_err() {
            error!(%action_id, "toast action panicked");
        }

        let keep = self
            .store
            .get(action.owner)
            .is_some_and(|record| record.keep_on_screen);
        if keep {
            self.redisplay(action.owner);
        } else {
            self.remove_toast(action.owner);
        }
    }

    /// Handles a platform dismissal. Only a user cancel retires the toast.
    pub fn on_dismissed(&mut self, id: ToastId, reason: DismissReason) {
        match reason {
            DismissReason::UserCanceled => {
                if let Some(record) = self.store.get_mut(id) {
                    record.keep_on_screen = false;
                }
                self.remove_toast(id);
            }
            other => debug!(%id, ?other, "toast dismissed by platform"),
        }
    }

    /// Handles a toast the platform failed to show by retiring it.
    pub fn on_failed(&mut self, id: ToastId) {
        warn!(%id, "platform failed to show toast");
        self.remove_toast(id);
    }

    /// Delivers deferred content for a toast and schedules its first display.
    ///
    /// Content for a toast that is gone, or already has content, is dropped.
    pub fn content_ready(&mut self, id: ToastId, content: ToastContent) {
        if self.attach_content(id, content) {
            self.schedule_display(id);
        } else {
            debug!(%id, "dropping content for stale toast");
        }
    }

    /// Removes a toast and everything it owns. Unknown ids are a no-op.
    ///
    /// Returns whether a record was removed.
    pub fn remove_toast(&mut self, id: ToastId) -> bool {
        let Some(record) = self.store.remove(id) else {
            return false;
        };

        if let Err(err) = self
            .sink
            .remove_history(record.tag(), &self.settings.toast_group)
        {
            warn!(%id, %err, "failed to remove toast from history");
        }
        self.actions.remove_all(&record.owned_actions);

        if record.is_default_scenario() {
            let effects = self.lane.on_removed(id, self.now);
            self.apply(effects);
        }

        debug!(%id, source = %record.source(), "removed toast");
        true
    }

    pub fn set_presentation(&mut self, mode: PresentationMode) {
        self.presentation = mode;
    }

    #[must_use]
    pub fn presentation(&self) -> PresentationMode {
        self.presentation
    }

    #[must_use]
    pub fn settings(&self) -> &MirrorSettings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    #[must_use]
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    #[must_use]
    pub fn lane(&self) -> &DefaultLane {
        &self.lane
    }

    #[must_use]
    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut F {
        &mut self.feed
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }

    /// Record of the toast surfacing `source`, if any.
    #[must_use]
    pub fn toast_for_source(&self, source: SourceId) -> Option<&ToastRecord> {
        self.store.get_by_source(source)
    }

    /// Events posted through handles and not drained yet.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.inbox.pending()
    }

    fn drain_events(&mut self) -> bool {
        let mut refresh = false;
        for event in self.inbox.drain() {
            match event {
                MirrorEvent::FeedRefreshed => refresh = true,
                MirrorEvent::Activated(argument) => self.on_activated(&argument),
                MirrorEvent::Dismissed(id, reason) => self.on_dismissed(id, reason),
                MirrorEvent::Failed(id) => self.on_failed(id),
                MirrorEvent::ContentReady(id, content) => self.content_ready(id, content),
            }
        }
        refresh
    }

    fn reconcile(&mut self) {
        let notifications = self.feed.all_notifications();
        let changes = self.diff.advance(notifications.iter().map(|n| n.id));
        if changes.is_empty() {
            return;
        }

        let mut by_source: HashMap<SourceId, &Notification> =
            notifications.iter().map(|n| (n.id, n)).collect();

        // Displays wait until the whole diff has been applied.
        let mut ready = Vec::new();
        for source in &changes.appeared {
            if self.store.get_by_source(*source).is_some() {
                continue;
            }
            let Some(notification) = by_source.remove(source) else {
                continue;
            };
            if let Some(id) = self.surface(notification) {
                ready.push(id);
            }
        }

        for source in &changes.disappeared {
            if let Some(id) = self.store.get_by_source(*source).map(ToastRecord::id) {
                self.remove_toast(id);
            }
        }

        for id in ready {
            self.schedule_display(id);
        }

        debug!(
            appeared = changes.appeared.len(),
            disappeared = changes.disappeared.len(),
            live = self.store.len(),
            "reconciled notification feed"
        );
    }

    /// Creates the record for a new notification and starts building its
    /// content. Returns the id when the content is already available.
    fn surface(&mut self, notification: &Notification) -> Option<ToastId> {
        let scenario = Scenario::classify(notification);
        let (id, replaced) = self.store.create(
            notification.id,
            scenario.is_default(),
            notification.reports_progress(),
        );
        if let Some(old) = replaced {
            self.actions.remove_all(&old.owned_actions);
            if old.is_default_scenario() {
                let effects = self.lane.on_removed(old.id(), self.now);
                self.apply(effects);
            }
        }

        let on_activate: Callback = notification
            .on_activate
            .clone()
            .unwrap_or_else(|| Arc::new(|| {}));
        self.register_action(id, id.body_action(), on_activate);

        match self.builder.build(notification, id) {
            BuildOutcome::Ready(content) => self.attach_content(id, content).then_some(id),
            BuildOutcome::Deferred => {
                debug!(%id, source = %notification.id, "content build deferred");
                None
            }
        }
    }

    fn register_action(&mut self, owner: ToastId, action: ActionId, callback: Callback) {
        match self.actions.register(action, owner, callback) {
            Ok(()) => {
                if let Some(record) = self.store.get_mut(owner) {
                    record.owned_actions.push(action);
                }
            }
            Err(err) => error!(%owner, %err, "failed to register toast action"),
        }
    }

    /// Registers button actions and stores the rendered content on the record.
    fn attach_content(&mut self, id: ToastId, content: ToastContent) -> bool {
        let Some(record) = self.store.get(id) else {
            return false;
        };
        if record.is_ready() {
            return false;
        }
        let scenario = if record.is_default_scenario() {
            Scenario::Default
        } else {
            Scenario::Reminder
        };

        let launch = ToastArguments::for_action(id.body_action()).to_string();
        let mut buttons = Vec::with_capacity(content.buttons.len());
        for button in content.buttons {
            let arguments = match button.activation {
                ButtonActivation::Invoke(callback) => {
                    let action = ActionId::new();
                    self.register_action(id, action, callback);
                    Some(ToastArguments::for_action(action).to_string())
                }
                ButtonActivation::Body => Some(launch.clone()),
                ButtonActivation::Dismiss => None,
            };
            buttons.push(RenderedButton {
                label: button.label,
                arguments,
            });
        }

        let rendered = RenderedContent {
            lines: content.lines,
            attribution: content.attribution,
            logo: content.logo,
            buttons,
            progress_bar: content.progress_bar,
            scenario,
            duration: content.duration,
            launch,
        };

        let Some(record) = self.store.get_mut(id) else {
            return false;
        };
        record.keep_on_screen = content.keep_on_screen;
        record.content = Some(Arc::new(rendered));
        true
    }

    /// Builds the sink payload of a record. `None` while content is missing.
    fn toast_for(&self, id: ToastId) -> Option<ToastNotification> {
        let record = self.store.get(id)?;
        let content = Arc::clone(record.content.as_ref()?);
        let data = if record.reports_progress() {
            let report = self.feed.progress(record.source());
            record.progress.display_data(report.as_ref())
        } else {
            None
        };
        let priority = if record.is_default_scenario() {
            ToastPriority::Default
        } else {
            ToastPriority::High
        };

        Some(ToastNotification {
            tag: record.tag().to_string(),
            group: self.settings.toast_group.clone(),
            content,
            priority,
            suppress_popup: false,
            data,
            expires_on_reboot: false,
        })
    }

    /// First display: straight to the sink for reminders, through the lane
    /// for default-scenario toasts.
    fn schedule_display(&mut self, id: ToastId) {
        let Some(is_default) = self.store.get(id).map(ToastRecord::is_default_scenario) else {
            return;
        };
        let Some(toast) = self.toast_for(id) else {
            return;
        };

        if is_default {
            let effects = self.lane.enqueue(LaneContext::new(id, toast), self.now);
            self.apply(effects);
        } else {
            self.display(toast);
        }
    }

    /// Shows a kept toast again after activation.
    fn redisplay(&mut self, id: ToastId) {
        let Some(is_default) = self.store.get(id).map(ToastRecord::is_default_scenario) else {
            return;
        };

        if is_default && self.lane.active_id() != Some(id) {
            self.schedule_display(id);
            return;
        }
        if let Some(toast) = self.toast_for(id) {
            self.display(toast);
        }
    }

    fn popups_suppressed(&self) -> bool {
        self.settings.suppress_popups_when_fullscreen && self.presentation.covers_screen()
    }

    fn display(&mut self, mut toast: ToastNotification) {
        toast.suppress_popup = self.popups_suppressed();
        if let Err(err) = self.sink.show(&toast) {
            warn!(tag = %toast.tag, %err, "failed to show toast");
        }
    }

    fn apply(&mut self, effects: Vec<LaneEffect>) {
        let mut pending: VecDeque<LaneEffect> = effects.into();
        while let Some(effect) = pending.pop_front() {
            match effect {
                LaneEffect::Display { id, toast } => {
                    if self.store.get(id).is_some() {
                        // Progress may have moved on while the toast was queued.
                        let current = self.toast_for(id).unwrap_or(toast);
                        self.display(current);
                    } else {
                        debug!(%id, "skipping display of stale toast");
                        pending.extend(self.lane.on_removed(id, self.now));
                    }
                }
                LaneEffect::Retire { id, hidden, mut shadow } => {
                    debug!(%id, "retiring default toast into history");
                    if let Some(current) = self.toast_for(id) {
                        shadow.data = current.data;
                    }
                    if let Err(err) = self.sink.hide(&hidden) {
                        warn!(%id, %err, "failed to hide toast");
                    }
                    if let Err(err) = self.sink.show(&shadow) {
                        warn!(%id, %err, "failed to file toast into history");
                    }
                }
            }
        }
    }

    fn process_progress(&mut self) {
        for id in self.store.ids() {
            let Some(record) = self.store.get(id) else {
                continue;
            };
            if !record.reports_progress() || !record.is_ready() {
                continue;
            }
            let Some(report) = self.feed.progress(record.source()) else {
                continue;
            };

            let Some(record) = self.store.get_mut(id) else {
                continue;
            };
            if let Some(data) = record.progress.observe(&report) {
                if let Err(err) = self
                    .sink
                    .update(&data, record.tag(), &self.settings.toast_group)
                {
                    warn!(%id, %err, "failed to update toast progress");
                    record.progress.forget_last();
                }
            }

            if !report.ongoing {
                debug!(%id, state = ?report.state, "progress finished, retiring toast");
                self.remove_toast(id);
            }
        }
    }
}

impl<F, S, B> Drop for ToastMirror<F, S, B>
where
    F: NotificationFeed,
    S: ToastSink,
    B: ContentBuilder,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::{NotificationKind, ProgressReport, ProgressState};
    use crate::infrastructure::{InMemoryFeed, RecordingSink, SinkCall, StandardContentBuilder};
    use crate::mirror::LaneState;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    type Mirror = ToastMirror<InMemoryFeed, RecordingSink, StandardContentBuilder>;

    fn mirror() -> Mirror {
        ToastMirror::new(
            InMemoryFeed::new(),
            RecordingSink::new(),
            StandardContentBuilder::new(),
            MirrorSettings::default(),
        )
    }

    fn note(id: u64) -> Notification {
        Notification::new(SourceId::new(id), format!("notification {id}"))
    }

    #[test]
    fn new_mirror_connects_sink() {
        let mut m = mirror();
        assert!(m.sink().is_connected());

        m.shutdown();
        assert!(!m.sink().is_connected());
        m.shutdown();
    }

    #[test]
    fn reminder_is_shown_directly_with_high_priority() {
        let mut m = mirror();
        m.feed_mut().push(note(1).important());
        m.on_feed_refresh();

        let shown = m.sink().shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].priority, ToastPriority::High);
        assert_eq!(m.lane().state(), LaneState::Idle);
    }

    #[test]
    fn default_toasts_share_one_slot() {
        let mut m = mirror();
        m.feed_mut().push(note(1));
        m.feed_mut().push(note(2));
        m.on_feed_refresh();

        assert_eq!(m.sink().shown().len(), 1);
        assert_eq!(m.lane().state(), LaneState::ActivePending);
    }

    #[test]
    fn body_activation_runs_callback_and_retires_toast() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut m = mirror();
        m.feed_mut().push(note(1).important().on_activate(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        m.on_feed_refresh();
        let launch = m.sink().shown()[0].content.launch.clone();

        m.on_activated(&launch);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(m.store().is_empty());
        assert!(m.actions().is_empty());
    }

    #[test]
    fn panicking_callback_does_not_escape() {
        let mut m = mirror();
        m.feed_mut()
            .push(note(1).important().on_activate(|| panic!("host bug")));
        m.on_feed_refresh();
        let launch = m.sink().shown()[0].content.launch.clone();

        m.on_activated(&launch);
        assert!(m.store().is_empty());
    }

    #[test]
    fn unknown_activation_is_ignored() {
        let mut m = mirror();
        m.feed_mut().push(note(1));
        m.on_feed_refresh();

        m.on_activated("id=00000000-0000-0000-0000-000000000000");
        m.on_activated("garbage");

        assert_eq!(m.store().len(), 1);
    }

    #[test]
    fn non_cancel_dismissals_keep_the_toast() {
        let mut m = mirror();
        m.feed_mut().push(note(1));
        m.on_feed_refresh();
        let id = m.toast_for_source(SourceId::new(1)).unwrap().id();

        m.on_dismissed(id, DismissReason::TimedOut);
        m.on_dismissed(id, DismissReason::ApplicationHidden);
        assert!(m.store().get(id).is_some());

        m.on_dismissed(id, DismissReason::UserCanceled);
        assert!(m.store().get(id).is_none());
        assert_eq!(m.lane().state(), LaneState::Idle);
    }

    #[test]
    fn removal_cleans_history_and_is_idempotent() {
        let mut m = mirror();
        m.feed_mut().push(note(1));
        m.on_feed_refresh();
        let id = m.toast_for_source(SourceId::new(1)).unwrap().id();

        assert!(m.remove_toast(id));
        assert!(!m.remove_toast(id));

        let history_removals = m
            .sink()
            .calls()
            .iter()
            .filter(|c| matches!(c, SinkCall::RemoveHistory { .. }))
            .count();
        assert_eq!(history_removals, 1);
    }

    #[test]
    fn popups_are_suppressed_while_fullscreen() {
        let mut m = mirror();
        m.set_presentation(PresentationMode::Fullscreen);
        m.feed_mut().push(note(1).important());
        m.on_feed_refresh();

        assert!(m.sink().shown()[0].suppress_popup);
    }

    #[test]
    fn failed_show_is_logged_not_propagated() {
        let mut m = mirror();
        m.sink_mut().set_failing(true);
        m.feed_mut().push(note(1).important());
        m.on_feed_refresh();

        assert!(m.sink().shown().is_empty());
        assert_eq!(m.store().len(), 1);
    }

    #[test]
    fn tick_reconciles_when_unread_count_changes() {
        let mut m = mirror();
        let now = Instant::now();
        m.on_tick(now);
        assert!(m.store().is_empty());

        m.feed_mut().push(note(1));
        m.on_tick(now + Duration::from_millis(16));

        assert_eq!(m.store().len(), 1);
    }

    #[test]
    fn handle_events_are_applied_on_tick() {
        let mut m = mirror();
        m.feed_mut().push(note(1));
        m.on_tick(Instant::now());
        let id = m.toast_for_source(SourceId::new(1)).unwrap().id();

        m.handle().dismissed(id, DismissReason::UserCanceled);
        assert_eq!(m.pending_events(), 1);
        assert!(m.store().get(id).is_some());

        m.on_tick(Instant::now());
        assert_eq!(m.pending_events(), 0);
        assert!(m.store().get(id).is_none());
    }

    #[test]
    fn terminal_progress_pushes_final_state_then_retires() {
        let mut m = mirror();
        let source = SourceId::new(5);
        m.feed_mut()
            .push(note(5).with_kind(NotificationKind::Progress));
        m.feed_mut()
            .set_progress(source, ProgressReport::new(0.9, ProgressState::Active));
        let now = Instant::now();
        m.on_tick(now);

        m.feed_mut()
            .set_progress(source, ProgressReport::new(1.0, ProgressState::Completed));
        m.on_tick(now + Duration::from_millis(16));

        let statuses: Vec<_> = m
            .sink()
            .updates()
            .iter()
            .map(|data| data.status.clone())
            .collect();
        assert_eq!(statuses, vec!["In progress", "Completed"]);
        assert!(m.toast_for_source(source).is_none());
    }
}
