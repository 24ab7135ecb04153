// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `appliance_ctl` - toggle a networked appliance over plain HTTP.
//!
//! The device (a fan behind an ESP board, in the reference deployment)
//! exposes three bodiless `GET` endpoints:
//!
//! - `http://{host}:{port}/on`
//! - `http://{host}:{port}/off`
//! - `http://{host}:{port}/status`
//!
//! A `200` response confirms a command; anything else leaves the locally
//! held state untouched.
//!
//! # Features
//!
//! - **Single-flight toggling**: at most one command per device is in flight
//! - **Timeouts**: every request is bounded (5 s by default)
//! - **Observers**: callbacks for state transitions and outcomes
//! - **Settings**: JSON-persisted host, port and preferences
//!
//! # Quick Start
//!
//! ```no_run
//! use appliance_ctl::{DeviceController, Settings, Subscribable};
//!
//! #[tokio::main]
//! async fn main() -> appliance_ctl::Result<()> {
//!     let settings = Settings::load_or_default(&Settings::default_path()?);
//!     let controller = DeviceController::builder().name("Fan").build()?;
//!
//!     controller.on_state_changed(|change| {
//!         let state = change.current();
//!         println!("on={} pending={}", state.is_on(), state.is_pending());
//!     });
//!
//!     if let Some(Ok(reachability)) = controller.auto_connect(&settings).await {
//!         println!("reachable: {}", reachability.is_reachable());
//!     }
//!
//!     let toggled = controller.toggle(&settings.endpoint()).await?;
//!     println!("fan is now {}", toggled.power());
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod endpoint;
pub mod error;
pub mod protocol;
pub mod settings;
pub mod state;
pub mod subscription;
pub mod types;

pub use controller::{
    ControllerBuilder, DeviceController, Reachability, StatusResult, ToggleResult, Toggled,
};
pub use endpoint::{Endpoint, EndpointConfig, resolve};
pub use error::{
    ControlError, EndpointError, Error, ParseError, ProtocolError, Result, SettingsError,
    ValueError,
};
pub use protocol::{DeviceResponse, HttpTransport, Payload, Transport};
pub use settings::Settings;
pub use state::{Device, DeviceState, StateChange};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{Action, DeviceId, DeviceKind, PowerState};
