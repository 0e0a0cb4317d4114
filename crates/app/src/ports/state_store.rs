//! State store port — the registry, bindings, and last-operated contract.
//!
//! Every method is a synchronous in-memory computation; nothing here
//! blocks or suspends. The store itself does not re-validate caller
//! preconditions that the use-case layer already checks (`register` and
//! `bind` assume pre-validation), but the two mutations whose misuse the
//! original left undefined return explicit errors instead:
//! [`set_status`](StateStore::set_status) on an unbound slot and
//! [`undo_last`](StateStore::undo_last) with no history.
//!
//! Serializing access across concurrent requests is the caller's job: the
//! hub service holds the store behind a single lock and acquires it once
//! per operation, so no check-then-act sequence can interleave.

use homehub_domain::appliance::{Appliance, ApplianceStatus};
use homehub_domain::error::HomeHubError;
use homehub_domain::id::{ApplianceName, SlotId};

/// Holds the set of registered appliance names, the slot bindings, and the
/// last-operated slot pointer.
pub trait StateStore {
    /// Whether `name` has been registered.
    fn is_registered(&self, name: &ApplianceName) -> bool;

    /// Insert `name` into the registry.
    ///
    /// The caller must have already checked
    /// [`StateStore::is_registered`]; there is no internal re-check.
    fn register(&mut self, name: ApplianceName);

    /// Whether `slot` currently has no binding.
    fn is_slot_available(&self, slot: &SlotId) -> bool;

    /// Whether `name` currently appears as the appliance of any binding.
    fn is_appliance_bound(&self, name: &ApplianceName) -> bool;

    /// Bind `slot` to `name` with initial status [`ApplianceStatus::Off`].
    ///
    /// The caller must have already checked
    /// [`StateStore::is_slot_available`] and
    /// [`StateStore::is_appliance_bound`]; an existing binding for `slot`
    /// would be overwritten.
    fn bind(&mut self, slot: SlotId, name: ApplianceName);

    /// Set the status of the appliance bound to `slot`, record `slot` as
    /// the last-operated slot, and return the updated appliance.
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::SlotNotBound`] when `slot` has no binding.
    fn set_status(
        &mut self,
        slot: &SlotId,
        status: ApplianceStatus,
    ) -> Result<Appliance, HomeHubError>;

    /// All currently-bound slot identifiers, in no particular order.
    fn bound_slots(&self) -> Vec<SlotId>;

    /// Flip the status of the appliance at the last-operated slot.
    ///
    /// Delegates to [`set_status`](StateStore::set_status), so the
    /// last-operated slot is re-recorded as itself: a second consecutive
    /// undo re-flips the same slot (toggle replay, not an undo stack).
    ///
    /// # Errors
    ///
    /// Returns [`HomeHubError::NoPriorOperation`] when no status change
    /// has happened yet.
    fn undo_last(&mut self) -> Result<Appliance, HomeHubError>;

    /// The slot of the most recent status change, if any.
    fn last_operated_slot(&self) -> Option<SlotId>;
}
