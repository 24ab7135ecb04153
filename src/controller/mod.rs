// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command/state controller.
//!
//! A [`DeviceController`] owns exactly one [`Device`] record and turns the
//! intent "toggle this device" into one HTTP request:
//!
//! 1. reject with [`ControlError::Busy`] if a request is already in flight
//! 2. pick the opposite of the confirmed state (`on` when off, `off` when on)
//! 3. resolve the endpoint, failing with [`ControlError::Configuration`]
//! 4. set `pending` and send the request under the configured timeout
//! 5. settle: flip `is_on` on `200`, keep it otherwise, always clear `pending`
//!
//! The `pending` flag is the only lock guarding the record. Checking and
//! setting it happen under one write of the record, so two overlapping
//! calls can never both reach the network.
//!
//! # Examples
//!
//! ```no_run
//! use appliance_ctl::DeviceController;
//! use appliance_ctl::endpoint::EndpointConfig;
//!
//! # async fn example() -> appliance_ctl::Result<()> {
//! let controller = DeviceController::builder().build()?;
//! let endpoint = EndpointConfig::new("10.37.55.116", "80");
//!
//! match controller.toggle(&endpoint).await {
//!     Ok(toggled) => println!("fan is now {}", toggled.power()),
//!     Err(e) => eprintln!("toggle failed: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod outcome;

pub use builder::ControllerBuilder;
pub use outcome::{Reachability, StatusResult, ToggleResult, Toggled};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::endpoint::{Endpoint, EndpointConfig};
use crate::error::{ControlError, ProtocolError};
use crate::protocol::{DeviceResponse, HttpTransport, Transport};
use crate::settings::Settings;
use crate::state::{Device, DeviceState, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::{Action, DeviceId, DeviceKind, PowerState};

/// Controller for a single networked appliance.
///
/// Cloning is cheap and yields a handle to the same device record and
/// observer registry.
pub struct DeviceController<T: Transport = HttpTransport> {
    transport: Arc<T>,
    device: Arc<RwLock<Device>>,
    callbacks: Arc<CallbackRegistry>,
    timeout: Duration,
}

impl DeviceController<HttpTransport> {
    /// Returns a builder for an HTTP-backed controller.
    #[must_use]
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }
}

impl<T: Transport> DeviceController<T> {
    pub(crate) fn new(transport: T, device: Device, timeout: Duration) -> Self {
        Self {
            transport: Arc::new(transport),
            device: Arc::new(RwLock::new(device)),
            callbacks: Arc::new(CallbackRegistry::new()),
            timeout,
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.device.read().id()
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> String {
        self.device.read().name().to_string()
    }

    /// Returns the appliance category.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.device.read().kind()
    }

    /// Returns the read-only `{is_on, pending}` view for rendering.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.device.read().state()
    }

    /// Returns a snapshot of the whole device record.
    #[must_use]
    pub fn device(&self) -> Device {
        self.device.read().clone()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Asks the device for the opposite of its confirmed state.
    ///
    /// Host and port are resolved on every call; nothing is cached. When
    /// this returns, `pending` is `false` and observers have been notified.
    ///
    /// # Errors
    ///
    /// - [`ControlError::Busy`] if a request is already in flight (no request sent)
    /// - [`ControlError::Configuration`] if host or port are malformed (no request sent)
    /// - [`ControlError::Network`] on transport failure or timeout
    /// - [`ControlError::UnexpectedStatus`] if the device answered with a non-200 status
    pub async fn toggle(&self, endpoint: &EndpointConfig) -> ToggleResult {
        let (target, endpoint, started) = match self.begin_toggle(endpoint) {
            Ok(started) => started,
            Err(e) => {
                tracing::warn!(device_id = %self.id(), error = %e, "Toggle not attempted");
                let result = Err(e);
                self.callbacks.dispatch_toggled(&result);
                return result;
            }
        };
        let guard = PendingGuard::new(&self.device, &self.callbacks);
        self.callbacks.dispatch_state_change(&started);

        tracing::debug!(
            device_id = %self.id(),
            url = %endpoint,
            requested = %target,
            "Sending toggle request"
        );

        let result = match self.request(&endpoint).await {
            Ok(response) if response.is_ok() => Ok(Toggled::new(target.is_on(), response.payload())),
            Ok(response) => Err(ControlError::UnexpectedStatus(response.status())),
            Err(e) => Err(ControlError::Network(e)),
        };

        let confirmed = result.as_ref().ok().map(Toggled::is_on);
        let settled = guard.settle(confirmed);
        self.callbacks.dispatch_state_change(&settled);

        match &result {
            Ok(toggled) => {
                tracing::info!(device_id = %self.id(), state = %toggled.power(), "Device toggled");
                if let Some(reported) = toggled.reported_power().filter(|_| toggled.has_drift()) {
                    tracing::warn!(
                        device_id = %self.id(),
                        assumed = %toggled.power(),
                        reported = %reported,
                        "Device reported a different power state than assumed"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(device_id = %self.id(), url = %endpoint, error = %e, "Toggle failed");
            }
        }

        self.callbacks.dispatch_toggled(&result);
        result
    }

    /// Checks whether the device answers on its `status` endpoint.
    ///
    /// Never touches the device record, so it may run while a toggle is in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Configuration`] if host or port are malformed.
    /// Network failures are reported as [`Reachability::Unreachable`].
    pub async fn query_status(&self, endpoint: &EndpointConfig) -> StatusResult {
        let result = match endpoint.resolve(Action::Status) {
            Ok(endpoint) => {
                tracing::debug!(url = %endpoint, "Checking device reachability");
                Ok(match self.request(&endpoint).await {
                    Ok(response) if response.is_ok() => Reachability::Reachable {
                        payload: response.payload(),
                    },
                    Ok(response) => {
                        Reachability::Unreachable(format!("unexpected status {}", response.status()))
                    }
                    Err(e) => Reachability::Unreachable(e.to_string()),
                })
            }
            Err(e) => Err(ControlError::Configuration(e)),
        };

        match &result {
            Ok(Reachability::Reachable { .. }) => tracing::info!("Device is reachable"),
            Ok(Reachability::Unreachable(detail)) => {
                tracing::warn!(detail = %detail, "Device is unreachable");
            }
            Err(e) => tracing::warn!(error = %e, "Status check not attempted"),
        }

        self.callbacks.dispatch_status(&result);
        result
    }

    /// Runs [`query_status`](Self::query_status) when `auto_connect` is
    /// enabled in `settings`.
    ///
    /// Returns `None` if auto-connect is disabled.
    pub async fn auto_connect(&self, settings: &Settings) -> Option<StatusResult> {
        if !settings.auto_connect {
            tracing::debug!("Auto-connect disabled, skipping status check");
            return None;
        }
        Some(self.query_status(&settings.endpoint()).await)
    }

    /// Checks and sets `pending` under a single write of the record.
    fn begin_toggle(
        &self,
        endpoint: &EndpointConfig,
    ) -> Result<(PowerState, Endpoint, StateChange), ControlError> {
        let mut device = self.device.write();

        if device.state().is_pending() {
            return Err(ControlError::Busy);
        }

        let target = device.state().power().toggled();
        let action = target.action();
        debug_assert!(action.is_command(), "toggle must target on or off");
        let endpoint = endpoint.resolve(action)?;

        let Some(change) = device.begin_request() else {
            return Err(ControlError::Busy);
        };
        Ok((target, endpoint, change))
    }

    /// Sends one `GET` under the controller's timeout.
    ///
    /// When the deadline fires the in-flight request is dropped, so a late
    /// response can never reach the record.
    async fn request(&self, endpoint: &Endpoint) -> Result<DeviceResponse, ProtocolError> {
        match tokio::time::timeout(self.timeout, self.transport.get(endpoint.url())).await {
            Ok(result) => result,
            Err(_) => Err(ProtocolError::Timeout(
                u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        }
    }
}

impl<T: Transport> Subscribable for DeviceController<T> {
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    fn on_toggled<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ToggleResult) + Send + Sync + 'static,
    {
        self.callbacks.on_toggled(callback)
    }

    fn on_status_checked<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StatusResult) + Send + Sync + 'static,
    {
        self.callbacks.on_status_checked(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

impl<T: Transport> Clone for DeviceController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            device: Arc::clone(&self.device),
            callbacks: Arc::clone(&self.callbacks),
            timeout: self.timeout,
        }
    }
}

impl<T: Transport> fmt::Debug for DeviceController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceController")
            .field("device", &*self.device.read())
            .field("timeout", &self.timeout)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

/// Clears `pending` if a toggle future is dropped before it settles, or if
/// an observer panics while the request is outstanding.
struct PendingGuard<'a> {
    device: &'a RwLock<Device>,
    callbacks: &'a CallbackRegistry,
    armed: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(device: &'a RwLock<Device>, callbacks: &'a CallbackRegistry) -> Self {
        Self {
            device,
            callbacks,
            armed: true,
        }
    }

    fn settle(mut self, confirmed: Option<bool>) -> StateChange {
        self.armed = false;
        self.device.write().finish_request(confirmed)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let change = self.device.write().finish_request(None);
            tracing::debug!("Toggle abandoned before completion, clearing pending");
            // A second observer panic during unwinding would abort the process.
            if !std::thread::panicking() {
                self.callbacks.dispatch_state_change(&change);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};

    use parking_lot::Mutex;
    use reqwest::Url;

    use crate::error::EndpointError;

    enum Step {
        Respond(DeviceResponse),
        Delay(Duration, DeviceResponse),
        Fail(String),
        Hang,
    }

    /// In-memory transport that replays a script of responses.
    #[derive(Default)]
    struct ScriptedTransport {
        script: Mutex<VecDeque<Step>>,
        requests: Mutex<Vec<Url>>,
    }

    impl ScriptedTransport {
        fn with(steps: impl IntoIterator<Item = Step>) -> Self {
            Self {
                script: Mutex::new(steps.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_paths(&self) -> Vec<String> {
            self.requests
                .lock()
                .iter()
                .map(|url| url.path().to_string())
                .collect()
        }
    }

    impl Transport for ScriptedTransport {
        async fn get(&self, url: &Url) -> Result<DeviceResponse, ProtocolError> {
            self.requests.lock().push(url.clone());
            let step = self
                .script
                .lock()
                .pop_front()
                .unwrap_or(Step::Respond(DeviceResponse::ok("")));
            match step {
                Step::Respond(response) => Ok(response),
                Step::Delay(delay, response) => {
                    tokio::time::sleep(delay).await;
                    Ok(response)
                }
                Step::Fail(message) => Err(ProtocolError::ConnectionFailed(message)),
                Step::Hang => std::future::pending().await,
            }
        }
    }

    fn controller(steps: impl IntoIterator<Item = Step>) -> DeviceController<ScriptedTransport> {
        ControllerBuilder::new().build_with_transport(ScriptedTransport::with(steps))
    }

    fn endpoint() -> EndpointConfig {
        EndpointConfig::new("10.37.55.116", "80")
    }

    fn ok() -> Step {
        Step::Respond(DeviceResponse::ok(""))
    }

    #[tokio::test]
    async fn toggle_from_off_succeeds() {
        let controller = controller([Step::Respond(DeviceResponse::ok(r#"{"state":"on"}"#))]);

        let toggled = controller.toggle(&endpoint()).await.unwrap();

        assert!(toggled.is_on());
        assert_eq!(toggled.payload().unwrap()["state"], "on");
        assert_eq!(controller.state(), DeviceState::with_flags(true, false));
        assert_eq!(controller.transport().request_paths(), vec!["/on"]);
    }

    #[tokio::test]
    async fn toggle_requests_opposite_of_confirmed_state() {
        let controller = controller([ok(), ok()]);

        controller.toggle(&endpoint()).await.unwrap();
        let toggled = controller.toggle(&endpoint()).await.unwrap();

        assert!(!toggled.is_on());
        assert_eq!(controller.transport().request_paths(), vec!["/on", "/off"]);
    }

    #[tokio::test]
    async fn toggle_parity_after_n_successes() {
        let controller = controller(std::iter::empty());

        for n in 1..=7u32 {
            controller.toggle(&endpoint()).await.unwrap();
            assert_eq!(controller.state().is_on(), n % 2 == 1);
            assert!(!controller.state().is_pending());
        }
    }

    #[tokio::test]
    async fn toggle_unparseable_body_still_succeeds() {
        let controller = controller([Step::Respond(DeviceResponse::ok("Fan ON"))]);

        let toggled = controller.toggle(&endpoint()).await.unwrap();

        assert!(toggled.is_on());
        assert!(toggled.payload().is_none());
    }

    #[tokio::test]
    async fn toggle_unexpected_status_keeps_state() {
        let controller = controller([Step::Respond(DeviceResponse::new(404, "not found"))]);

        let err = controller.toggle(&endpoint()).await.unwrap_err();

        assert!(matches!(err, ControlError::UnexpectedStatus(404)));
        assert_eq!(controller.state(), DeviceState::with_flags(false, false));
    }

    #[tokio::test]
    async fn toggle_transport_failure_keeps_state() {
        let controller = controller([ok(), Step::Fail("connection refused".into())]);
        controller.toggle(&endpoint()).await.unwrap();

        let err = controller.toggle(&endpoint()).await.unwrap_err();

        assert!(matches!(
            err,
            ControlError::Network(ProtocolError::ConnectionFailed(_))
        ));
        assert_eq!(controller.state(), DeviceState::with_flags(true, false));
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_timeout_fires_after_five_seconds() {
        let controller = controller([ok(), Step::Hang]);
        controller.toggle(&endpoint()).await.unwrap();

        let start = tokio::time::Instant::now();
        let err = controller.toggle(&endpoint()).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(matches!(
            err,
            ControlError::Network(ProtocolError::Timeout(5000))
        ));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(5) && elapsed < Duration::from_millis(5100));
        assert_eq!(controller.state(), DeviceState::with_flags(true, false));
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_is_discarded() {
        let controller = controller([Step::Delay(
            Duration::from_secs(8),
            DeviceResponse::ok(""),
        )]);

        let err = controller.toggle(&endpoint()).await.unwrap_err();
        assert!(err.is_timeout());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(controller.state(), DeviceState::with_flags(false, false));
    }

    #[tokio::test]
    async fn back_to_back_toggles_send_one_request() {
        let controller = controller([Step::Delay(
            Duration::from_millis(50),
            DeviceResponse::ok(""),
        )]);
        let endpoint = endpoint();

        let (first, second) = tokio::join!(controller.toggle(&endpoint), controller.toggle(&endpoint));

        let results = [first, second];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let busy = results
            .iter()
            .filter(|r| matches!(r, Err(ControlError::Busy)))
            .count();
        assert_eq!(successes, 1);
        assert_eq!(busy, 1);
        assert_eq!(controller.transport().request_paths().len(), 1);
        assert_eq!(controller.state(), DeviceState::with_flags(true, false));
    }

    #[tokio::test]
    async fn toggle_while_pending_is_busy() {
        let controller = controller([Step::Hang]);
        let endpoint = endpoint();

        let in_flight = controller.toggle(&endpoint);
        tokio::pin!(in_flight);

        tokio::select! {
            biased;
            _ = &mut in_flight => panic!("request should still be in flight"),
            () = tokio::task::yield_now() => {}
        }
        assert!(controller.state().is_pending());

        let err = controller.toggle(&endpoint).await.unwrap_err();
        assert!(matches!(err, ControlError::Busy));
        assert_eq!(controller.transport().request_paths().len(), 1);
        assert!(controller.state().is_pending());
    }

    #[tokio::test]
    async fn toggle_empty_host_is_configuration_error() {
        let controller = controller(std::iter::empty());

        let err = controller
            .toggle(&EndpointConfig::new("", "80"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ControlError::Configuration(EndpointError::EmptyHost)
        ));
        assert!(controller.transport().request_paths().is_empty());
        assert_eq!(controller.state(), DeviceState::new());
    }

    #[tokio::test]
    async fn toggle_invalid_port_is_configuration_error() {
        let controller = controller(std::iter::empty());

        let err = controller
            .toggle(&EndpointConfig::new("10.0.0.1", "eighty"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ControlError::Configuration(EndpointError::InvalidPort(_))
        ));
        assert!(controller.transport().request_paths().is_empty());
        assert!(!controller.state().is_pending());
    }

    #[tokio::test]
    async fn configuration_changes_apply_on_next_call() {
        let controller = controller([ok(), ok()]);

        controller
            .toggle(&EndpointConfig::new("10.0.0.1", "80"))
            .await
            .unwrap();
        controller
            .toggle(&EndpointConfig::new("10.0.0.2", "8080"))
            .await
            .unwrap();

        let requests = controller.transport().requests.lock().clone();
        assert_eq!(requests[0].as_str(), "http://10.0.0.1/on");
        assert_eq!(requests[1].as_str(), "http://10.0.0.2:8080/off");
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_toggle_clears_pending() {
        let controller = controller([Step::Hang]);
        let changes = Arc::new(Mutex::new(Vec::<StateChange>::new()));
        let changes_clone = changes.clone();
        controller.on_state_changed(move |change| changes_clone.lock().push(*change));

        let abandoned =
            tokio::time::timeout(Duration::from_secs(1), controller.toggle(&endpoint())).await;

        assert!(abandoned.is_err());
        assert_eq!(controller.state(), DeviceState::with_flags(false, false));
        let changes = changes.lock();
        assert_eq!(changes.len(), 2);
        assert!(changes[0].current().is_pending());
        assert!(!changes[1].current().is_pending());
    }

    #[tokio::test]
    async fn panicking_observer_does_not_leave_pending_set() {
        let controller = controller([ok()]);
        let id = controller.on_state_changed(|change| {
            assert!(!change.current().is_pending(), "observer rejects pending");
        });
        let endpoint = endpoint();

        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut toggle = std::pin::pin!(controller.toggle(&endpoint));
            let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
            let _ = toggle.as_mut().poll(&mut cx);
        }));

        assert!(panicked.is_err());
        assert_eq!(controller.state(), DeviceState::with_flags(false, false));

        assert!(controller.unsubscribe(id));
        let toggled = controller.toggle(&endpoint).await.unwrap();
        assert!(toggled.is_on());
        assert_eq!(controller.transport().request_paths(), vec!["/on"]);
    }

    #[tokio::test]
    async fn observers_see_pending_then_settled() {
        let controller = controller([ok()]);
        let changes = Arc::new(Mutex::new(Vec::<DeviceState>::new()));
        let changes_clone = changes.clone();
        controller.on_state_changed(move |change| changes_clone.lock().push(change.current()));

        controller.toggle(&endpoint()).await.unwrap();

        assert_eq!(
            *changes.lock(),
            vec![
                DeviceState::with_flags(false, true),
                DeviceState::with_flags(true, false),
            ]
        );
    }

    #[tokio::test]
    async fn outcome_reported_after_pending_cleared() {
        let controller = controller([Step::Respond(DeviceResponse::new(500, ""))]);
        let observed = Arc::new(Mutex::new(None::<(bool, bool)>));

        let observed_clone = observed.clone();
        let handle = controller.clone();
        controller.on_toggled(move |result| {
            let pending = handle.state().is_pending();
            *observed_clone.lock() = Some((result.is_err(), pending));
        });

        let _ = controller.toggle(&endpoint()).await;

        assert_eq!(*observed.lock(), Some((true, false)));
    }

    #[tokio::test]
    async fn busy_and_configuration_outcomes_are_reported() {
        let controller = controller(std::iter::empty());
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        controller.on_toggled(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        let _ = controller.toggle(&EndpointConfig::new("", "80")).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn query_status_reachable() {
        let controller = controller([Step::Respond(DeviceResponse::ok(r#"{"uptime":42}"#))]);

        let reachability = controller.query_status(&endpoint()).await.unwrap();

        match reachability {
            Reachability::Reachable { payload } => assert_eq!(payload.unwrap()["uptime"], 42),
            Reachability::Unreachable(detail) => panic!("unexpected: {detail}"),
        }
        assert_eq!(controller.transport().request_paths(), vec!["/status"]);
        assert_eq!(controller.state(), DeviceState::new());
    }

    #[tokio::test]
    async fn query_status_unreachable() {
        let controller = controller([
            Step::Fail("connection refused".into()),
            Step::Respond(DeviceResponse::new(503, "")),
        ]);

        let first = controller.query_status(&endpoint()).await.unwrap();
        let second = controller.query_status(&endpoint()).await.unwrap();

        assert!(matches!(first, Reachability::Unreachable(ref d) if d.contains("refused")));
        assert_eq!(
            second,
            Reachability::Unreachable("unexpected status 503".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn query_status_timeout_is_unreachable() {
        let controller = controller([Step::Hang]);

        let reachability = controller.query_status(&endpoint()).await.unwrap();

        assert_eq!(
            reachability,
            Reachability::Unreachable("request timed out after 5000 ms".to_string())
        );
    }

    #[tokio::test]
    async fn query_status_invalid_configuration() {
        let controller = controller(std::iter::empty());

        let err = controller
            .query_status(&EndpointConfig::new("10.0.0.1", "0"))
            .await
            .unwrap_err();

        assert!(matches!(err, ControlError::Configuration(_)));
        assert!(controller.transport().request_paths().is_empty());
    }

    #[tokio::test]
    async fn query_status_runs_alongside_toggle() {
        let controller = controller([
            Step::Delay(Duration::from_millis(50), DeviceResponse::ok("")),
            ok(),
        ]);
        let endpoint = endpoint();

        let (toggled, status) = tokio::join!(
            controller.toggle(&endpoint),
            controller.query_status(&endpoint)
        );

        assert!(toggled.unwrap().is_on());
        assert!(status.unwrap().is_reachable());
        assert_eq!(controller.state(), DeviceState::with_flags(true, false));
    }

    #[tokio::test]
    async fn auto_connect_respects_setting() {
        let controller = controller([ok()]);

        let disabled = Settings {
            auto_connect: false,
            ..Settings::default()
        };
        assert!(controller.auto_connect(&disabled).await.is_none());
        assert!(controller.transport().request_paths().is_empty());

        let enabled = Settings::default();
        let result = controller.auto_connect(&enabled).await.unwrap();
        assert!(result.unwrap().is_reachable());
        assert_eq!(controller.transport().request_paths(), vec!["/status"]);
    }

    #[test]
    fn controller_debug() {
        let controller = controller(std::iter::empty());
        let debug = format!("{controller:?}");
        assert!(debug.contains("DeviceController"));
        assert!(debug.contains("Fan"));
    }
}
