// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observer subscriptions for the device controller.
//!
//! Three kinds of notification exist:
//!
//! - state transitions of the `{is_on, pending}` flags
//! - toggle outcomes
//! - status query outcomes
//!
//! Callbacks run synchronously on the task that completed the operation,
//! after the device record has settled and before the operation returns
//! to its caller.

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
