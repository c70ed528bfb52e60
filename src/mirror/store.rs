// SPDX-License-Identifier: MPL-2.0
//! Toast records, indexed both by toast id and by source notification.

use super::progress::ProgressTracker;
use crate::application::port::RenderedContent;
use crate::domain::notification::SourceId;
use crate::domain::toast::{ActionId, ToastId};
use std::collections::HashMap;
use std::sync::Arc;

/// One surfaced notification.
#[derive(Debug)]
pub struct ToastRecord {
    id: ToastId,
    source: SourceId,
    tag: String,
    is_default_scenario: bool,
    reports_progress: bool,
    /// Rendered content; `None` until the content builder delivered it.
    pub content: Option<Arc<RenderedContent>>,
    pub keep_on_screen: bool,
    pub progress: ProgressTracker,
    pub owned_actions: Vec<ActionId>,
}

impl ToastRecord {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> SourceId {
        self.source
    }

    /// Sink dedup key; stable for the lifetime of the record.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn is_default_scenario(&self) -> bool {
        self.is_default_scenario
    }

    #[must_use]
    pub fn reports_progress(&self) -> bool {
        self.reports_progress
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.content.is_some()
    }
}

/// Holds every live toast record.
///
/// `source -> id` and `id -> source` lookups are kept consistent: both index
/// entries are written on [`create`](Self::create) and dropped on
/// [`remove`](Self::remove).
#[derive(Debug, Default)]
pub struct ToastStore {
    records: HashMap<ToastId, ToastRecord>,
    by_source: HashMap<SourceId, ToastId>,
}

impl ToastStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record with a fresh id for `source`.
    ///
    /// A previous record for the same source is replaced and returned, so the
    /// caller can release what it owned.
    pub fn create(
        &mut self,
        source: SourceId,
        is_default_scenario: bool,
        reports_progress: bool,
    ) -> (ToastId, Option<ToastRecord>) {
        let replaced = self
            .by_source
            .get(&source)
            .copied()
            .and_then(|old| self.remove(old));

        let id = ToastId::new();
        self.records.insert(
            id,
            ToastRecord {
                id,
                source,
                tag: id.tag(),
                is_default_scenario,
                reports_progress,
                content: None,
                keep_on_screen: false,
                progress: ProgressTracker::new(),
                owned_actions: Vec::new(),
            },
        );
        self.by_source.insert(source, id);
        (id, replaced)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: ToastId) -> Option<&mut ToastRecord> {
        self.records.get_mut(&id)
    }

    #[must_use]
    pub fn get_by_source(&self, source: SourceId) -> Option<&ToastRecord> {
        self.by_source.get(&source).and_then(|id| self.records.get(id))
    }

    /// Removes a record and both of its index entries.
    ///
    /// Unknown ids are a no-op returning `None`.
    pub fn remove(&mut self, id: ToastId) -> Option<ToastRecord> {
        let record = self.records.remove(&id)?;
        if self.by_source.get(&record.source) == Some(&id) {
            self.by_source.remove(&record.source);
        }
        Some(record)
    }

    /// Snapshot of the live ids, for passes that remove records while iterating.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.records.keys().copied().collect()
    }

    pub fn sources(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.by_source.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToastRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
