// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device record and state transitions.
//!
//! [`Device`] is the record a controller owns. [`DeviceState`] is the
//! read-only `{is_on, pending}` view handed to renderers, and
//! [`StateChange`] describes one transition of that view.

mod device_state;
mod state_change;

pub use device_state::{Device, DeviceState};
pub use state_change::StateChange;
