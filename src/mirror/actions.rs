// SPDX-License-Identifier: MPL-2.0
//! Registry of callbacks reachable from toast activation arguments.

use crate::domain::notification::Callback;
use crate::domain::toast::{ActionId, ToastId};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// A callback together with the toast it belongs to.
#[derive(Clone)]
pub struct RegisteredAction {
    pub owner: ToastId,
    pub callback: Callback,
}

impl std::fmt::Debug for RegisteredAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredAction")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

/// Maps opaque action identifiers to callbacks.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: HashMap<ActionId, RegisteredAction>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under `id` on behalf of toast `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAction`] if `id` is already registered; the
    /// existing registration is left untouched. Identifiers are generated
    /// fresh per toast, so this is a programming error and also trips a
    /// debug assertion.
    pub fn register(&mut self, id: ActionId, owner: ToastId, callback: Callback) -> Result<()> {
        if self.actions.contains_key(&id) {
            debug_assert!(false, "action {id} registered twice");
            return Err(Error::DuplicateAction(id));
        }
        self.actions.insert(id, RegisteredAction { owner, callback });
        Ok(())
    }

    /// Looks up an action. Unknown identifiers resolve to `None`.
    #[must_use]
    pub fn resolve(&self, id: ActionId) -> Option<RegisteredAction> {
        self.actions.get(&id).cloned()
    }

    /// Removes every listed action, skipping identifiers that are not registered.
    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a ActionId>) {
        for id in ids {
            self.actions.remove(id);
        }
    }

    #[must_use]
    pub fn contains(&self, id: ActionId) -> bool {
        self.actions.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
