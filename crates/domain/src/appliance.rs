//! Appliance — the named, stateful record a remote slot controls.

use serde::{Deserialize, Serialize};

use crate::id::ApplianceName;

/// Operating status of an appliance.
///
/// The discriminants are the remote's operation codes: `0` turns an
/// appliance off, `1` turns it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplianceStatus {
    #[default]
    Off = 0,
    On = 1,
}

impl ApplianceStatus {
    /// Map a remote operation code to a status.
    ///
    /// Returns `None` for any code outside `{0, 1}`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            _ => None,
        }
    }

    /// The operation code this status corresponds to.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// The opposite status, as applied by undo.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl std::fmt::Display for ApplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            Self::On => f.write_str("ON"),
        }
    }
}

/// A named appliance together with its current status.
///
/// Appliances come into existence when a slot is bound to them and are
/// never deleted; only their status changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appliance {
    pub name: ApplianceName,
    pub status: ApplianceStatus,
}

impl Appliance {
    /// A freshly bound appliance. Bindings always start switched off.
    #[must_use]
    pub fn new(name: ApplianceName) -> Self {
        Self {
            name,
            status: ApplianceStatus::Off,
        }
    }
}
