// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical actions understood by the device's HTTP command channel.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A command or query exposed by the device as a URL path segment.
///
/// # Examples
///
/// ```
/// use appliance_ctl::types::Action;
///
/// assert_eq!(Action::On.as_str(), "on");
/// assert_eq!("status".parse::<Action>().unwrap(), Action::Status);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Switch the appliance on.
    On,
    /// Switch the appliance off.
    Off,
    /// Query reachability. Has no side effect on the appliance.
    Status,
}

impl Action {
    /// Returns the path segment for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Status => "status",
        }
    }

    /// Returns `true` if this action changes the appliance state.
    #[must_use]
    pub const fn is_command(&self) -> bool {
        !matches!(self, Self::Status)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "status" => Ok(Self::Status),
            _ => Err(ValueError::InvalidAction(s.to_string())),
        }
    }
}
