// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller builder.

use std::time::Duration;

use crate::controller::DeviceController;
use crate::error::Error;
use crate::protocol::{HttpTransport, Transport};
use crate::state::Device;
use crate::types::DeviceKind;

/// Builder for [`DeviceController`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use appliance_ctl::DeviceController;
/// use appliance_ctl::types::DeviceKind;
///
/// # fn example() -> appliance_ctl::Result<()> {
/// let controller = DeviceController::builder()
///     .name("Desk Lamp")
///     .kind(DeviceKind::Light)
///     .timeout(Duration::from_secs(3))
///     .build()?;
/// assert_eq!(controller.name(), "Desk Lamp");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ControllerBuilder {
    name: String,
    kind: DeviceKind,
    timeout: Duration,
}

impl ControllerBuilder {
    /// Default device name.
    pub const DEFAULT_NAME: &'static str = "Fan";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a builder with default name, kind and timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            kind: DeviceKind::default(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the human-readable device name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the appliance category.
    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a controller using the HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<DeviceController<HttpTransport>, Error> {
        let transport = HttpTransport::builder()
            .connect_timeout(self.timeout)
            .build()?;
        Ok(self.build_with_transport(transport))
    }

    /// Builds a controller on top of a custom transport.
    #[must_use]
    pub fn build_with_transport<T: Transport>(self, transport: T) -> DeviceController<T> {
        let device = Device::new(self.name, self.kind);
        tracing::debug!(
            device_id = %device.id(),
            name = device.name(),
            kind = %device.kind(),
            timeout = ?self.timeout,
            "Creating device controller"
        );
        DeviceController::new(transport, device, self.timeout)
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
