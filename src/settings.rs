// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User settings persistence.
//!
//! The controller never reads settings on its own. The application loads
//! them, hands [`Settings::endpoint`] to each controller call, and saves
//! them when the user edits a field. Edits therefore apply to the next
//! operation without a restart.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::endpoint::EndpointConfig;
use crate::error::SettingsError;

/// Persisted user settings.
///
/// Missing fields in a stored file fall back to their defaults, so files
/// written by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Device host name or IP address.
    pub host: String,
    /// Device port, as typed by the user.
    pub port: String,
    /// Check reachability when the application starts.
    pub auto_connect: bool,
    /// Whether the presentation layer should raise device alerts.
    pub notifications_enabled: bool,
}

impl Settings {
    /// Default device address.
    pub const DEFAULT_HOST: &'static str = "10.37.55.116";
    /// Default device port.
    pub const DEFAULT_PORT: &'static str = "80";

    /// Returns the platform-specific settings file path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::NoConfigDir` if the platform has no config directory.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push("appliance-ctl");
        path.push("settings.json");
        Ok(path)
    }

    /// Loads settings from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::info!("No settings file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to the defaults on any error.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::error!("Failed to load settings from {}: {e}", path.display());
            Self::default()
        })
    }

    /// Saves settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Returns the endpoint configuration for the next controller call.
    #[must_use]
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(self.host.clone(), self.port.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT.to_string(),
            auto_connect: true,
            notifications_enabled: true,
        }
    }
}
