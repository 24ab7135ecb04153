// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device record and its observable state.

use crate::types::{DeviceId, DeviceKind, PowerState};

use super::StateChange;

/// Observable state of a device: the two flags a presentation layer renders.
///
/// Four combinations are reachable: idle/off, idle/on, pending/off and
/// pending/on. `is_on` is always the last confirmed outcome, never the value
/// requested by an in-flight command.
///
/// # Examples
///
/// ```
/// use appliance_ctl::state::DeviceState;
///
/// let state = DeviceState::new();
/// assert!(!state.is_on());
/// assert!(!state.is_pending());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DeviceState {
    is_on: bool,
    pending: bool,
}

impl DeviceState {
    /// Creates the initial state: off and idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with explicit flag values.
    #[must_use]
    pub fn with_flags(is_on: bool, pending: bool) -> Self {
        Self { is_on, pending }
    }

    /// Returns the last confirmed on/off value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the last confirmed value as a [`PowerState`].
    #[must_use]
    pub fn power(&self) -> PowerState {
        PowerState::from(self.is_on)
    }

    /// Returns `true` while a command request is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns `true` when no request is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.pending
    }
}

/// The single device record owned by a controller.
///
/// `id`, `name` and `kind` are fixed at creation. The state flags are only
/// changed through [`begin_request`](Self::begin_request) and
/// [`finish_request`](Self::finish_request), which the controller calls from
/// its request-completion path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: DeviceId,
    name: String,
    kind: DeviceKind,
    state: DeviceState,
}

impl Device {
    /// Creates a new record in the initial idle/off state.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: DeviceId::new(),
            name: name.into(),
            kind,
            state: DeviceState::new(),
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the appliance category.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Returns a copy of the observable state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Marks a request as in flight.
    ///
    /// Returns `None` without touching the record if one is already pending.
    pub(crate) fn begin_request(&mut self) -> Option<StateChange> {
        if self.state.pending {
            return None;
        }
        let previous = self.state;
        self.state.pending = true;
        Some(StateChange::new(previous, self.state))
    }

    /// Clears `pending` and, when `confirmed` is set, records it as the new
    /// on/off value.
    pub(crate) fn finish_request(&mut self, confirmed: Option<bool>) -> StateChange {
        let previous = self.state;
        self.state.pending = false;
        if let Some(is_on) = confirmed {
            self.state.is_on = is_on;
        }
        StateChange::new(previous, self.state)
    }
}
