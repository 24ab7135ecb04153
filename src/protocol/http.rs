// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport backed by `reqwest`.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ProtocolError;
use crate::protocol::{DeviceResponse, Transport};

/// HTTP transport for the device's command channel.
///
/// Stateless: each call is an independent request with no body and no
/// authentication headers. The overall deadline is enforced by the
/// controller; the optional connect timeout here only bounds the TCP
/// handshake.
///
/// # Examples
///
/// ```no_run
/// use appliance_ctl::protocol::{HttpTransport, Transport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new()?;
/// let url = "http://10.37.55.116:80/status".parse()?;
/// let response = transport.get(&url).await?;
/// println!("status {}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpTransportBuilder::new().build()
    }

    /// Returns a builder for a customised transport.
    #[must_use]
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<DeviceResponse, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        tracing::debug!(status, body = %body, "Received HTTP response");

        Ok(DeviceResponse::new(status, body))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ProtocolError {
    if e.is_connect() {
        ProtocolError::ConnectionFailed(e.to_string())
    } else {
        ProtocolError::Http(e)
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Default)]
pub struct HttpTransportBuilder {
    connect_timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the time spent establishing the TCP connection.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the transport.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<HttpTransport, ProtocolError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;
        Ok(HttpTransport { client })
    }
}
