// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outcomes reported by the controller.

use serde_json::Value;

use crate::error::ControlError;
use crate::protocol::Payload;
use crate::types::PowerState;

/// Result of [`DeviceController::toggle`](super::DeviceController::toggle).
pub type ToggleResult = Result<Toggled, ControlError>;

/// Result of [`DeviceController::query_status`](super::DeviceController::query_status).
pub type StatusResult = Result<Reachability, ControlError>;

/// A toggle confirmed by a `200` response.
#[derive(Debug, Clone, PartialEq)]
pub struct Toggled {
    is_on: bool,
    payload: Option<Payload>,
}

impl Toggled {
    /// Creates a confirmed toggle outcome.
    #[must_use]
    pub fn new(is_on: bool, payload: Option<Payload>) -> Self {
        Self { is_on, payload }
    }

    /// Returns the new confirmed on/off value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the new confirmed value as a [`PowerState`].
    #[must_use]
    pub fn power(&self) -> PowerState {
        PowerState::from(self.is_on)
    }

    /// Returns the JSON object sent by the device, if any.
    ///
    /// Informational only; it never influences the recorded state.
    #[must_use]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Returns the power state the device itself reported, if the payload
    /// carries one.
    #[must_use]
    pub fn reported_power(&self) -> Option<PowerState> {
        self.payload.as_ref().and_then(reported_power)
    }

    /// Returns `true` if the device reported a power state that disagrees
    /// with the locally assumed one.
    #[must_use]
    pub fn has_drift(&self) -> bool {
        self.reported_power()
            .is_some_and(|reported| reported.is_on() != self.is_on)
    }
}

/// Outcome of a reachability check against the `status` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Reachability {
    /// The device answered `200`.
    Reachable {
        /// JSON object sent by the device, if any.
        payload: Option<Payload>,
    },
    /// The device could not be reached or answered with another status.
    Unreachable(String),
}

impl Reachability {
    /// Returns `true` for [`Reachability::Reachable`].
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }
}

/// Extracts a power state from a `state`/`power` field, matched
/// case-insensitively. Accepts `"ON"`/`"OFF"`, `1`/`0` and booleans.
pub(crate) fn reported_power(payload: &Payload) -> Option<PowerState> {
    payload
        .iter()
        .filter(|(key, _)| key.eq_ignore_ascii_case("state") || key.eq_ignore_ascii_case("power"))
        .find_map(|(_, value)| match value {
            Value::String(s) => s.parse().ok(),
            Value::Bool(b) => Some(PowerState::from(*b)),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(PowerState::Off),
                Some(1) => Some(PowerState::On),
                _ => None,
            },
            _ => None,
        })
}
