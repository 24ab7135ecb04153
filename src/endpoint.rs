// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint resolution for the device's HTTP command channel.
//!
//! Every command or query maps to `http://{host}:{port}/{action}`. The
//! resolver is a pure function: it performs no I/O and holds no state, so a
//! changed host or port takes effect on the very next call.
//!
//! # Examples
//!
//! ```
//! use appliance_ctl::endpoint::{EndpointConfig, resolve};
//! use appliance_ctl::types::Action;
//!
//! let endpoint = resolve("10.37.55.116", "80", Action::On).unwrap();
//! assert_eq!(endpoint.as_str(), "http://10.37.55.116:80/on");
//!
//! let config = EndpointConfig::new("192.168.1.40", "8080");
//! let status = config.resolve(Action::Status).unwrap();
//! assert_eq!(status.as_str(), "http://192.168.1.40:8080/status");
//! ```

use std::fmt;

use reqwest::Url;

use crate::error::EndpointError;
use crate::types::Action;

/// Host and port of the device, as supplied by the user.
///
/// Both are kept as plain strings: validation happens on every resolution,
/// never at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    host: String,
    port: String,
}

impl EndpointConfig {
    /// Creates a configuration from raw host and port strings.
    #[must_use]
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port string.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Resolves the URL for `action`.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, action: Action) -> Result<Endpoint, EndpointError> {
        resolve(&self.host, &self.port, action)
    }
}

/// A validated command URL.
///
/// [`as_str`](Self::as_str) returns the composed string exactly as built,
/// including a default port such as `:80`, which [`Url`] would elide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    raw: String,
    url: Url,
    action: Action,
}

impl Endpoint {
    /// Returns the composed URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the action this endpoint targets.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Builds `http://{host}:{port}/{action}` and checks that it is a
/// well-formed URL addressing exactly that host, port and path.
///
/// # Errors
///
/// - [`EndpointError::EmptyHost`] if `host` is blank
/// - [`EndpointError::InvalidPort`] if `port` is not an integer in `[1, 65535]`
/// - [`EndpointError::InvalidEndpoint`] if the composed string does not parse,
///   or parses into something other than the intended authority and path
///   (for example a host containing `/`, `?`, `#`, `@`, whitespace or a
///   control character)
pub fn resolve(host: &str, port: &str, action: Action) -> Result<Endpoint, EndpointError> {
    if host.trim().is_empty() {
        return Err(EndpointError::EmptyHost);
    }

    let port_number = match port.parse::<u16>() {
        Ok(p) if p != 0 => p,
        _ => return Err(EndpointError::InvalidPort(port.to_string())),
    };

    let raw = format!("http://{host}:{port_number}/{action}");

    // URL parsing strips tabs and newlines silently, so the parsed host
    // could differ from the one logged and displayed.
    if host.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(EndpointError::InvalidEndpoint {
            url: raw,
            reason: "host contains whitespace or control characters".to_string(),
        });
    }

    let url = Url::parse(&raw).map_err(|e| EndpointError::InvalidEndpoint {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let expected_path = format!("/{action}");
    let well_formed = url.path() == expected_path
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && url.port_or_known_default() == Some(port_number);

    if !well_formed {
        return Err(EndpointError::InvalidEndpoint {
            url: raw,
            reason: "host contains characters not allowed in a URL authority".to_string(),
        });
    }

    Ok(Endpoint { raw, url, action })
}
