// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for controllers that report to observers.

use crate::controller::{StatusResult, ToggleResult};
use crate::state::StateChange;
use crate::subscription::SubscriptionId;

/// Trait for types that report state transitions and operation outcomes.
///
/// The presentation layer is a pure subscriber: it never writes device
/// state, it only renders what it is told.
///
/// # Examples
///
/// ```no_run
/// use appliance_ctl::{DeviceController, Subscribable};
///
/// # fn example() -> appliance_ctl::Result<()> {
/// let controller = DeviceController::builder().build()?;
///
/// let sub_id = controller.on_state_changed(|change| {
///     let state = change.current();
///     println!("on={} pending={}", state.is_on(), state.is_pending());
/// });
///
/// controller.on_toggled(|result| match result {
///     Ok(toggled) => println!("now {}", toggled.power()),
///     Err(e) => eprintln!("toggle failed: {e}"),
/// });
///
/// controller.unsubscribe(sub_id);
/// # Ok(())
/// # }
/// ```
pub trait Subscribable {
    /// Subscribes to `{is_on, pending}` transitions.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Subscribes to toggle outcomes.
    ///
    /// Called after `pending` has returned to `false`.
    fn on_toggled<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ToggleResult) + Send + Sync + 'static;

    /// Subscribes to status query outcomes.
    fn on_status_checked<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StatusResult) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
