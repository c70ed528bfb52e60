// SPDX-License-Identifier: MPL-2.0
//! Single-slot lane for default-scenario toasts.
//!
//! The `DefaultLane` shows at most one default-scenario toast at a time and
//! queues the rest. Once the active toast has been on screen for the dwell
//! duration and something is waiting, the active toast is retired into the
//! notification history and the next one is shown. An idle lane keeps
//! showing its toast indefinitely.
//!
//! The lane never talks to the sink itself: every transition returns the
//! [`LaneEffect`]s the caller has to apply.

use crate::application::port::{ToastNotification, ToastPriority};
use crate::domain::toast::ToastId;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A default-scenario toast waiting for, or occupying, the slot.
#[derive(Debug, Clone)]
pub struct LaneContext {
    id: ToastId,
    toast: ToastNotification,
}

impl LaneContext {
    #[must_use]
    pub fn new(id: ToastId, toast: ToastNotification) -> Self {
        Self { id, toast }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &ToastNotification {
        &self.toast
    }
}

/// Sink work requested by a lane transition.
#[derive(Debug, Clone, PartialEq)]
pub enum LaneEffect {
    /// Show this toast in the slot.
    Display {
        id: ToastId,
        toast: ToastNotification,
    },
    /// Take `hidden` off the screen and file `shadow`, a popup-less copy
    /// under a fresh tag, into the history.
    Retire {
        id: ToastId,
        hidden: ToastNotification,
        shadow: ToastNotification,
    },
}

/// Observable lane state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneState {
    Idle,
    Active,
    ActivePending,
}

#[derive(Debug)]
struct ActiveSlot {
    context: LaneContext,
    shown_at: Instant,
}

/// Serializes default-scenario toasts through one visible slot.
#[derive(Debug)]
pub struct DefaultLane {
    dwell: Duration,
    active: Option<ActiveSlot>,
    queue: VecDeque<LaneContext>,
}

impl DefaultLane {
    #[must_use]
    pub fn new(dwell: Duration) -> Self {
        Self {
            dwell,
            active: None,
            queue: VecDeque::new(),
        }
    }

    /// Offers a context to the lane.
    ///
    /// An idle lane shows it right away; otherwise it waits at the back of
    /// the queue. A context whose id is already in the lane is ignored.
    pub fn enqueue(&mut self, context: LaneContext, now: Instant) -> Vec<LaneEffect> {
        if self.contains(context.id) {
            return Vec::new();
        }

        if self.active.is_none() {
            return vec![self.activate(context, now)];
        }

        self.queue.push_back(context);
        Vec::new()
    }

    /// Rotates the slot when the dwell has elapsed and something is waiting.
    ///
    /// Should be called once per tick.
    pub fn process(&mut self, now: Instant) -> Vec<LaneEffect> {
        let Some(slot) = &self.active else {
            return self.activate_next(now).into_iter().collect();
        };

        let elapsed = now.saturating_duration_since(slot.shown_at);
        if self.queue.is_empty() || elapsed < self.dwell {
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(2);
        if let Some(retired) = self.retire_active() {
            effects.push(retired);
        }
        effects.extend(self.activate_next(now));
        effects
    }

    /// Forgets a toast that went away (dismissed, expired, or gone from the feed).
    ///
    /// Removing the active toast immediately promotes the next queued one,
    /// without waiting for the dwell. Unknown ids are a no-op.
    pub fn on_removed(&mut self, id: ToastId, now: Instant) -> Vec<LaneEffect> {
        if self.active_id() == Some(id) {
            self.active = None;
            return self.activate_next(now).into_iter().collect();
        }

        if let Some(pos) = self.queue.iter().position(|c| c.id == id) {
            self.queue.remove(pos);
        }
        Vec::new()
    }

    #[must_use]
    pub fn state(&self) -> LaneState {
        match (&self.active, self.queue.is_empty()) {
            (None, _) => LaneState::Idle,
            (Some(_), true) => LaneState::Active,
            (Some(_), false) => LaneState::ActivePending,
        }
    }

    #[must_use]
    pub fn active_id(&self) -> Option<ToastId> {
        self.active.as_ref().map(|slot| slot.context.id)
    }

    /// Queued ids, front first.
    pub fn queued_ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.queue.iter().map(LaneContext::id)
    }

    #[must_use]
    pub fn is_queued(&self, id: ToastId) -> bool {
        self.queue.iter().any(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.active_id() == Some(id) || self.is_queued(id)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    fn activate(&mut self, context: LaneContext, now: Instant) -> LaneEffect {
        let effect = LaneEffect::Display {
            id: context.id,
            toast: context.toast.clone(),
        };
        self.active = Some(ActiveSlot {
            context,
            shown_at: now,
        });
        effect
    }

    fn activate_next(&mut self, now: Instant) -> Option<LaneEffect> {
        let next = self.queue.pop_front()?;
        Some(self.activate(next, now))
    }

    fn retire_active(&mut self) -> Option<LaneEffect> {
        let slot = self.active.take()?;
        let hidden = slot.context.toast;
        let shadow = ToastNotification {
            // Fresh tag so later hides of the original never touch the copy.
            tag: ToastId::new().tag(),
            group: hidden.group.clone(),
            content: Arc::clone(&hidden.content),
            priority: ToastPriority::Default,
            suppress_popup: true,
            data: hidden.data.clone(),
            expires_on_reboot: false,
        };
        Some(LaneEffect::Retire {
            id: slot.context.id,
            hidden,
            shadow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RenderedContent;

    const DWELL: Duration = Duration::from_millis(600);

    fn context() -> LaneContext {
        let id = ToastId::new();
        LaneContext::new(
            id,
            ToastNotification {
                tag: id.tag(),
                group: "test".into(),
                content: Arc::new(RenderedContent::default()),
                priority: ToastPriority::Default,
                suppress_popup: false,
                data: None,
                expires_on_reboot: false,
            },
        )
    }

    fn displayed(effects: &[LaneEffect]) -> Vec<ToastId> {
        effects
            .iter()
            .filter_map(|e| match e {
                LaneEffect::Display { id, .. } => Some(*id),
                LaneEffect::Retire { .. } => None,
            })
            .collect()
    }

    #[test]
    fn new_lane_is_idle() {
        let lane = DefaultLane::new(DWELL);
        assert_eq!(lane.state(), LaneState::Idle);
        assert!(lane.active_id().is_none());
        assert_eq!(lane.queued_count(), 0);
    }

    #[test]
    fn enqueue_on_idle_displays_immediately() {
        let mut lane = DefaultLane::new(DWELL);
        let ctx = context();
        let id = ctx.id();

        let effects = lane.enqueue(ctx, Instant::now());

        assert_eq!(displayed(&effects), vec![id]);
        assert_eq!(lane.state(), LaneState::Active);
        assert_eq!(lane.active_id(), Some(id));
    }

    #[test]
    fn enqueue_while_active_queues() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        lane.enqueue(context(), now);

        let effects = lane.enqueue(context(), now);

        assert!(effects.is_empty());
        assert_eq!(lane.state(), LaneState::ActivePending);
        assert_eq!(lane.queued_count(), 1);
    }

    #[test]
    fn enqueue_same_id_twice_is_ignored() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        let ctx = context();
        lane.enqueue(ctx.clone(), now);

        assert!(lane.enqueue(ctx, now).is_empty());
        assert_eq!(lane.queued_count(), 0);
    }

    #[test]
    fn idle_lane_never_rotates() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        let ctx = context();
        let id = ctx.id();
        lane.enqueue(ctx, now);

        assert!(lane.process(now + DWELL * 10).is_empty());
        assert_eq!(lane.active_id(), Some(id));
    }

    #[test]
    fn process_waits_for_dwell() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        let first = context();
        let first_id = first.id();
        lane.enqueue(first, now);
        lane.enqueue(context(), now);

        assert!(lane.process(now + DWELL / 2).is_empty());
        assert_eq!(lane.active_id(), Some(first_id));
    }

    #[test]
    fn rotation_retires_into_history_then_displays_next() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        let first = context();
        let second = context();
        let (first_id, second_id) = (first.id(), second.id());
        let first_tag = first.toast().tag.clone();
        lane.enqueue(first, now);
        lane.enqueue(second, now);

        let effects = lane.process(now + DWELL);

        assert_eq!(effects.len(), 2);
        match &effects[0] {
            LaneEffect::Retire { id, hidden, shadow } => {
                assert_eq!(*id, first_id);
                assert_eq!(hidden.tag, first_tag);
                assert_ne!(shadow.tag, first_tag);
                assert_eq!(shadow.group, hidden.group);
                assert!(shadow.suppress_popup);
                assert_eq!(shadow.priority, ToastPriority::Default);
            }
            other => panic!("expected retire, got {other:?}"),
        }
        assert_eq!(displayed(&effects), vec![second_id]);
        assert_eq!(lane.state(), LaneState::Active);
    }

    #[test]
    fn rotation_is_fifo() {
        let mut lane = DefaultLane::new(DWELL);
        let mut now = Instant::now();
        let contexts: Vec<_> = (0..3).map(|_| context()).collect();
        let expected: Vec<_> = contexts.iter().map(LaneContext::id).collect();

        let mut order = Vec::new();
        for ctx in contexts {
            order.extend(displayed(&lane.enqueue(ctx, now)));
        }
        for _ in 0..4 {
            now += DWELL;
            order.extend(displayed(&lane.process(now)));
        }

        assert_eq!(order, expected);
        assert_eq!(lane.state(), LaneState::Active);
    }

    #[test]
    fn removing_active_promotes_without_dwell() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        let first = context();
        let second = context();
        let (first_id, second_id) = (first.id(), second.id());
        lane.enqueue(first, now);
        lane.enqueue(second, now);

        let effects = lane.on_removed(first_id, now);

        assert_eq!(displayed(&effects), vec![second_id]);
        assert_eq!(lane.active_id(), Some(second_id));
        assert_eq!(lane.queued_count(), 0);
    }

    #[test]
    fn removing_queued_keeps_relative_order() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        let contexts: Vec<_> = (0..4).map(|_| context()).collect();
        let ids: Vec<_> = contexts.iter().map(LaneContext::id).collect();
        for ctx in contexts {
            lane.enqueue(ctx, now);
        }

        let effects = lane.on_removed(ids[2], now);

        assert!(effects.is_empty());
        assert_eq!(lane.active_id(), Some(ids[0]));
        assert_eq!(lane.queued_ids().collect::<Vec<_>>(), vec![ids[1], ids[3]]);
    }

    #[test]
    fn removing_last_returns_to_idle() {
        let mut lane = DefaultLane::new(DWELL);
        let ctx = context();
        let id = ctx.id();
        lane.enqueue(ctx, Instant::now());

        assert!(lane.on_removed(id, Instant::now()).is_empty());
        assert_eq!(lane.state(), LaneState::Idle);
    }

    #[test]
    fn removing_unknown_is_noop() {
        let mut lane = DefaultLane::new(DWELL);
        let now = Instant::now();
        lane.enqueue(context(), now);
        lane.enqueue(context(), now);

        assert!(lane.on_removed(ToastId::new(), now).is_empty());
        assert_eq!(lane.state(), LaneState::ActivePending);
    }

    #[test]
    fn never_more_than_one_active() {
        let mut lane = DefaultLane::new(DWELL);
        let mut now = Instant::now();
        let mut shown: Option<ToastId> = None;
        let mut ids = Vec::new();

        let check = |effects: Vec<LaneEffect>, shown: &mut Option<ToastId>| {
            for effect in effects {
                match effect {
                    LaneEffect::Retire { id, .. } => {
                        assert_eq!(*shown, Some(id));
                        *shown = None;
                    }
                    LaneEffect::Display { id, .. } => {
                        assert!(shown.is_none(), "two toasts active at once");
                        *shown = Some(id);
                    }
                }
            }
        };

        for step in 0..12 {
            let ctx = context();
            ids.push(ctx.id());
            check(lane.enqueue(ctx, now), &mut shown);
            if step % 3 == 0 {
                if let Some(id) = lane.active_id() {
                    // removal clears the slot before the next display
                    shown = None;
                    check(lane.on_removed(id, now), &mut shown);
                }
            }
            now += DWELL / 2;
            check(lane.process(now), &mut shown);
            assert_eq!(shown, lane.active_id());
        }
    }
}
