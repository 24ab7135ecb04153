// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for appliance control.
//!
//! # Types
//!
//! - [`Action`] - Path segment sent to the device (`on`, `off`, `status`)
//! - [`PowerState`] - Confirmed On/Off state
//! - [`DeviceKind`] - Informational appliance category
//! - [`DeviceId`] - Opaque identifier of a device record

mod action;
mod device_id;
mod device_kind;
mod power;

pub use action::Action;
pub use device_id::DeviceId;
pub use device_kind::DeviceKind;
pub use power::PowerState;
