//! Locale-aware catalog for user-facing hub messages.
//!
//! Templates are keyed by [`MessageKey`] and use positional `{0}`/`{1}`
//! placeholders. The built-in `en-US` texts are the defaults; deployments
//! can register a [`Bundle`] per [`Locale`] to override or translate any
//! subset of keys. Lookup falls back to the built-in template when a
//! locale or key has no registered override.

use std::collections::HashMap;
use std::fmt;

use homehub_domain::error::{HomeHubError, ValidationError};

/// BCP 47 style locale tag selecting a message bundle (e.g. `en-US`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Wrap a locale tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// View the locale tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ApplianceNotRegistered,
    ApplianceAlreadyBound,
    SlotAlreadyUsed,
    BindingSuccessful,
    ApplianceSuccessfullyRegistered,
    ApplianceAlreadyRegistered,
    ApplianceOperationNotAllowed,
    SlotNotBound,
    ApplianceOperationSuccessful,
    NoActionToUndo,
    SlotIdRequired,
    ApplianceNameRequired,
}

impl MessageKey {
    /// The dotted catalog key, as used in bundle files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApplianceNotRegistered => "appliance_not_registered.message",
            Self::ApplianceAlreadyBound => "appliance_already_bound.message",
            Self::SlotAlreadyUsed => "slot_already_used.message",
            Self::BindingSuccessful => "binding_successful.message",
            Self::ApplianceSuccessfullyRegistered => "appliance_successfully_registered.message",
            Self::ApplianceAlreadyRegistered => "appliance_already_registered.message",
            Self::ApplianceOperationNotAllowed => "appliance_operation_not_allowed.message",
            Self::SlotNotBound => "slot_not_bound.message",
            Self::ApplianceOperationSuccessful => "appliance_operation_successful.message",
            Self::NoActionToUndo => "no_action_to_undo.message",
            Self::SlotIdRequired => "slot_id_required.message",
            Self::ApplianceNameRequired => "appliance_name_required.message",
        }
    }

    /// The built-in `en-US` template.
    #[must_use]
    pub fn default_template(self) -> &'static str {
        match self {
            Self::ApplianceNotRegistered => {
                "Appliance {0} is not registered with the home hub. Please register it before binding."
            }
            Self::ApplianceAlreadyBound => {
                "Appliance {0} is already bound to a remote slot."
            }
            Self::SlotAlreadyUsed => {
                "Remote slot {0} is already in use. Please choose a free slot."
            }
            Self::BindingSuccessful => {
                "Remote slot {0} has been bound to appliance {1}."
            }
            Self::ApplianceSuccessfullyRegistered => {
                "Appliance {0} has been registered with the home hub. Please bind a remote slot to use it."
            }
            Self::ApplianceAlreadyRegistered => {
                "Appliance {0} is already registered with the home hub. Please use a different name."
            }
            Self::ApplianceOperationNotAllowed => {
                "Operation not allowed for slot {0}. Allowed operations are 0 (OFF) and 1 (ON)."
            }
            Self::SlotNotBound => {
                "Slot {0} is not bound to any appliance. Please bind the slot first."
            }
            Self::ApplianceOperationSuccessful => "Appliance {0} has been turned {1}.",
            Self::NoActionToUndo => "There is no previous operation to undo.",
            Self::SlotIdRequired => {
                "To bind an appliance the slot id is required with at least 1 character."
            }
            Self::ApplianceNameRequired => {
                "To bind an appliance the appliance name is required with at least 1 character."
            }
        }
    }
}

/// A set of template overrides for one locale.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    templates: HashMap<MessageKey, String>,
}

impl Bundle {
    /// Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the template for `key`.
    #[must_use]
    pub fn with(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.templates.insert(key, template.into());
        self
    }

    fn get(&self, key: MessageKey) -> Option<&str> {
        self.templates.get(&key).map(String::as_str)
    }
}

/// Per-locale message bundles with built-in `en-US` defaults.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    bundles: HashMap<Locale, Bundle>,
}

impl MessageCatalog {
    /// Create a catalog holding only the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle for `locale`, replacing any previous one.
    #[must_use]
    pub fn with_bundle(mut self, locale: Locale, bundle: Bundle) -> Self {
        self.bundles.insert(locale, bundle);
        self
    }

    /// Render the template for `key` in `locale`, interpolating `args`
    /// into the `{0}`/`{1}` placeholders.
    #[must_use]
    pub fn render(&self, locale: &Locale, key: MessageKey, args: &[&str]) -> String {
        let template = self
            .bundles
            .get(locale)
            .and_then(|bundle| bundle.get(key))
            .unwrap_or_else(|| key.default_template());
        interpolate(template, args)
    }

    /// Render the localized detail for an operation refusal.
    #[must_use]
    pub fn describe_error(&self, locale: &Locale, error: &HomeHubError) -> String {
        match error {
            HomeHubError::ApplianceAlreadyRegistered { appliance } => self.render(
                locale,
                MessageKey::ApplianceAlreadyRegistered,
                &[appliance.as_str()],
            ),
            HomeHubError::ApplianceNotRegistered { appliance } => self.render(
                locale,
                MessageKey::ApplianceNotRegistered,
                &[appliance.as_str()],
            ),
            HomeHubError::ApplianceAlreadyBound { appliance } => self.render(
                locale,
                MessageKey::ApplianceAlreadyBound,
                &[appliance.as_str()],
            ),
            HomeHubError::SlotUnavailable { slot } => {
                self.render(locale, MessageKey::SlotAlreadyUsed, &[slot.as_str()])
            }
            HomeHubError::SlotNotBound { slot } => {
                self.render(locale, MessageKey::SlotNotBound, &[slot.as_str()])
            }
            HomeHubError::InvalidOperation { slot, .. } => self.render(
                locale,
                MessageKey::ApplianceOperationNotAllowed,
                &[slot.as_str()],
            ),
            HomeHubError::NoPriorOperation => {
                self.render(locale, MessageKey::NoActionToUndo, &[])
            }
            HomeHubError::Validation(ValidationError::BlankSlotId) => {
                self.render(locale, MessageKey::SlotIdRequired, &[])
            }
            HomeHubError::Validation(ValidationError::BlankApplianceName) => {
                self.render(locale, MessageKey::ApplianceNameRequired, &[])
            }
        }
    }
}

/// Substitute `{0}`/`{1}` placeholders in one scan over the template, so
/// placeholder-shaped text inside an argument is never re-substituted.
fn interpolate(template: &str, args: &[&str]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let tail = &rest[open..];
        let placeholder = tail.find('}').and_then(|close| {
            let index = tail[1..close].parse::<usize>().ok()?;
            Some((close, *args.get(index)?))
        });
        match placeholder {
            Some((close, arg)) => {
                rendered.push_str(arg);
                rest = &tail[close + 1..];
            }
            None => {
                // Not a known placeholder: keep the brace literally.
                rendered.push('{');
                rest = &tail[1..];
            }
        }
    }
    rendered.push_str(rest);
    rendered
}
