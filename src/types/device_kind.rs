// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Category of the controlled appliance.
///
/// Informational only: the controller behaves identically for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// A lamp or light fixture.
    Light,
    /// A fan.
    #[default]
    Fan,
    /// A generic wall switch.
    Switch,
    /// A switched power outlet.
    Outlet,
}

impl DeviceKind {
    /// Returns the lower-case name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Fan => "fan",
            Self::Switch => "switch",
            Self::Outlet => "outlet",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "fan" => Ok(Self::Fan),
            "switch" => Ok(Self::Switch),
            "outlet" => Ok(Self::Outlet),
            _ => Err(ValueError::InvalidDeviceKind(s.to_string())),
        }
    }
}
