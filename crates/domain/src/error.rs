//! Error taxonomy for hub operations.
//!
//! Every failure a hub operation can produce is an expected,
//! caller-recoverable condition: the boundary maps all of them to a
//! client-error response. Each layer defines its own typed errors and
//! converts via `#[from]`.

use crate::id::{ApplianceName, SlotId};

/// Validation failures for caller-supplied identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Slot identifier was empty or whitespace-only.
    #[error("slot identifier must not be blank")]
    BlankSlotId,
    /// Appliance name was empty or whitespace-only.
    #[error("appliance name must not be blank")]
    BlankApplianceName,
}

/// Every way a hub operation can be refused.
///
/// Variants carry the offending identifiers so boundaries can render
/// parameterized messages without re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HomeHubError {
    /// Appliance name collides with an existing registration.
    #[error("appliance '{appliance}' is already registered")]
    ApplianceAlreadyRegistered { appliance: ApplianceName },

    /// Operation references an appliance that was never registered.
    #[error("appliance '{appliance}' is not registered")]
    ApplianceNotRegistered { appliance: ApplianceName },

    /// Appliance already occupies some slot.
    #[error("appliance '{appliance}' is already bound to a slot")]
    ApplianceAlreadyBound { appliance: ApplianceName },

    /// Target slot already has a binding.
    #[error("slot '{slot}' is already bound to an appliance")]
    SlotUnavailable { slot: SlotId },

    /// Operation references a slot with no binding.
    #[error("slot '{slot}' is not bound to any appliance")]
    SlotNotBound { slot: SlotId },

    /// Operation code outside the supported `{0, 1}` range.
    ///
    /// Carries the raw code as the caller sent it, so non-numeric input
    /// is echoed back verbatim.
    #[error("operation {code} on slot '{slot}' is not allowed")]
    InvalidOperation { slot: SlotId, code: String },

    /// Undo requested with no toggle history.
    #[error("no previous operation to undo")]
    NoPriorOperation,

    /// A caller-supplied identifier failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl HomeHubError {
    /// Numeric status code carried in error responses.
    ///
    /// Every kind is a client error; the hub has no modeled server faults.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ApplianceAlreadyRegistered { .. }
            | Self::ApplianceNotRegistered { .. }
            | Self::ApplianceAlreadyBound { .. }
            | Self::SlotUnavailable { .. }
            | Self::SlotNotBound { .. }
            | Self::InvalidOperation { .. }
            | Self::NoPriorOperation
            | Self::Validation(_) => 400,
        }
    }
}
