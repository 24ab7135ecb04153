// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for controller observers.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::controller::{StatusResult, ToggleResult};
use crate::state::StateChange;

/// Unique identifier for a subscription.
///
/// IDs are unique within a controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

type ToggledCallback = Arc<dyn Fn(&ToggleResult) + Send + Sync>;

type StatusCheckedCallback = Arc<dyn Fn(&StatusResult) + Send + Sync>;

/// Registry for managing controller observer callbacks.
///
/// Uses `parking_lot::RwLock` for interior mutability, so registration and
/// dispatch can happen from any task. Dispatch clones the callback handles
/// out of the map before invoking them, so a callback may itself subscribe
/// or unsubscribe without deadlocking.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
    toggled_callbacks: RwLock<HashMap<SubscriptionId, ToggledCallback>>,
    status_callbacks: RwLock<HashMap<SubscriptionId, StatusCheckedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            state_changed_callbacks: RwLock::new(HashMap::new()),
            toggled_callbacks: RwLock::new(HashMap::new()),
            status_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for `{is_on, pending}` transitions.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for toggle outcomes.
    pub fn on_toggled<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ToggleResult) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.toggled_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for status query outcomes.
    pub fn on_status_checked<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StatusResult) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.status_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state_changed_callbacks.write().remove(&id).is_some()
            || self.toggled_callbacks.write().remove(&id).is_some()
            || self.status_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.state_changed_callbacks.write().clear();
        self.toggled_callbacks.write().clear();
        self.status_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a state transition. No-op transitions are not dispatched.
    pub fn dispatch_state_change(&self, change: &StateChange) {
        if change.is_noop() {
            return;
        }
        let callbacks: Vec<_> = self
            .state_changed_callbacks
            .read()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(change);
        }
    }

    /// Dispatches the outcome of a toggle.
    pub fn dispatch_toggled(&self, result: &ToggleResult) {
        let callbacks: Vec<_> = self.toggled_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(result);
        }
    }

    /// Dispatches the outcome of a status query.
    pub fn dispatch_status(&self, result: &StatusResult) {
        let callbacks: Vec<_> = self.status_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(result);
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.state_changed_callbacks.read().len()
            + self.toggled_callbacks.read().len()
            + self.status_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
