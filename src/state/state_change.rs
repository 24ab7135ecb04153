// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State transition representation.

use super::DeviceState;

/// A transition of the `{is_on, pending}` flags.
///
/// Emitted to observers every time the controller mutates the device
/// record, including transitions where only `pending` moves.
///
/// # Examples
///
/// ```
/// use appliance_ctl::state::{DeviceState, StateChange};
///
/// let change = StateChange::new(
///     DeviceState::with_flags(false, true),
///     DeviceState::with_flags(true, false),
/// );
/// assert!(change.power_changed());
/// assert!(change.pending_changed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    previous: DeviceState,
    current: DeviceState,
}

impl StateChange {
    /// Creates a transition from `previous` to `current`.
    #[must_use]
    pub fn new(previous: DeviceState, current: DeviceState) -> Self {
        Self { previous, current }
    }

    /// Returns the state before the transition.
    #[must_use]
    pub fn previous(&self) -> DeviceState {
        self.previous
    }

    /// Returns the state after the transition.
    #[must_use]
    pub fn current(&self) -> DeviceState {
        self.current
    }

    /// Returns `true` if the confirmed on/off value changed.
    #[must_use]
    pub fn power_changed(&self) -> bool {
        self.previous.is_on() != self.current.is_on()
    }

    /// Returns `true` if the pending flag changed.
    #[must_use]
    pub fn pending_changed(&self) -> bool {
        self.previous.is_pending() != self.current.is_pending()
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}
