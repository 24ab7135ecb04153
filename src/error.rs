// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `appliance_ctl` library.
//!
//! The hierarchy mirrors the life of a single device request: endpoint
//! resolution, transport, payload parsing, and the controller's own
//! outcome classification. Settings persistence has its own error type.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The configured endpoint could not be resolved.
    #[error("endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response payload.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Settings could not be loaded or saved.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// A controller operation did not complete successfully.
    #[error("control error: {0}")]
    Control(#[from] ControlError),
}

/// Errors raised when parsing a typed value from its textual form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An unknown endpoint action was provided.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// An unknown device kind was provided.
    #[error("invalid device kind: {0}")]
    InvalidDeviceKind(String),
}

/// Errors raised while building a command URL from host, port and action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// The host is empty or only whitespace.
    #[error("host must not be empty")]
    EmptyHost,

    /// The port is not a number in `[1, 65535]`.
    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    /// The composed string is not a well-formed URL for the given host.
    #[error("invalid endpoint {url}: {reason}")]
    InvalidEndpoint {
        /// The composed URL string.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors related to the HTTP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete before the deadline.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed but is not a JSON object.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to settings persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No platform configuration directory is available.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON.
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a controller operation that did not succeed.
///
/// Every variant leaves the device in its previous confirmed state with
/// `pending` cleared.
#[derive(Debug, Error)]
pub enum ControlError {
    /// A request for this device is already in flight.
    #[error("device is busy: a request is already in flight")]
    Busy,

    /// Host or port are malformed. Not retried.
    #[error("configuration error: {0}")]
    Configuration(#[from] EndpointError),

    /// Transport failure or timeout. Not retried.
    #[error("network error: {0}")]
    Network(#[from] ProtocolError),

    /// The device answered with a status other than 200.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),
}

impl ControlError {
    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(ProtocolError::Timeout(_)))
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
