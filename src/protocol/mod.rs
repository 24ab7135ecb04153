// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport used to reach the device.
//!
//! The device speaks plain HTTP/1.1: a bodiless `GET` per command, answered
//! with a status code and an optional JSON object. [`Transport`] is the seam
//! the controller talks through; [`HttpTransport`] is the production
//! implementation.
//!
//! Transports report every received status code as a successful
//! [`DeviceResponse`]. Interpreting the status is the controller's job.

mod http;

pub use http::{HttpTransport, HttpTransportBuilder};

use reqwest::Url;

use crate::error::{ParseError, ProtocolError};

/// Opaque diagnostic payload returned by the device on success.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Raw response received from the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResponse {
    status: u16,
    body: String,
}

impl DeviceResponse {
    /// Creates a response with the given status code and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response with the given body.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the status code is exactly 200.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Parses the body as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not JSON or not an object.
    pub fn json_object(&self) -> Result<Payload, ParseError> {
        match serde_json::from_str(&self.body)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Returns the body as a JSON object, or `None` when it is empty or
    /// cannot be parsed.
    ///
    /// Parse failures are logged and otherwise ignored.
    #[must_use]
    pub fn payload(&self) -> Option<Payload> {
        if self.body.trim().is_empty() {
            return None;
        }
        match self.json_object() {
            Ok(map) => Some(map),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring non-object response body");
                None
            }
        }
    }
}

/// Trait for transports that can issue a bodiless `GET` to the device.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a `GET` request to `url` and returns the response.
    ///
    /// Any status code is returned as `Ok`. Only transport failures
    /// (connection refused, DNS failure, broken body) are errors.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if no response could be obtained.
    async fn get(&self, url: &Url) -> Result<DeviceResponse, ProtocolError>;
}
