//! Identifier newtypes for slots and appliances.
//!
//! Both identifiers are caller-supplied path segments, so construction goes
//! through [`parse`](SlotId::parse), which rejects blank input. Once built,
//! an identifier is an opaque, comparable name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_name {
    ($(#[doc = $doc:expr])* $name:ident, $blank:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a raw identifier.
            ///
            /// # Errors
            ///
            /// Returns the blank-identifier [`ValidationError`] when the
            /// input is empty or whitespace-only.
            pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(ValidationError::$blank);
                }
                Ok(Self(raw))
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_name!(
    /// Identifier of one button/position on a remote control, used as the
    /// binding key.
    SlotId,
    BlankSlotId
);

define_name!(
    /// Unique name of an [`Appliance`](crate::appliance::Appliance) within
    /// the registry.
    ApplianceName,
    BlankApplianceName
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_non_blank_slot_id() {
        let slot = SlotId::parse("A").unwrap();
        assert_eq!(slot.as_str(), "A");
    }

    #[test]
    fn should_reject_empty_slot_id() {
        assert_eq!(SlotId::parse(""), Err(ValidationError::BlankSlotId));
    }

    #[test]
    fn should_reject_whitespace_only_appliance_name() {
        assert_eq!(
            ApplianceName::parse("   "),
            Err(ValidationError::BlankApplianceName)
        );
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let name: ApplianceName = "lamp".parse().unwrap();
        let text = name.to_string();
        let parsed: ApplianceName = text.parse().unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let slot = SlotId::parse("A").unwrap();
        assert_eq!(serde_json::to_string(&slot).unwrap(), "\"A\"");
    }

    #[test]
    fn should_order_slots_lexicographically() {
        let a = SlotId::parse("A").unwrap();
        let b = SlotId::parse("B").unwrap();
        assert!(a < b);
    }
}
