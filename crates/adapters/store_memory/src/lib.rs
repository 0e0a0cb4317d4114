//! # homehub-adapter-store-memory
//!
//! In-memory implementation of the [`StateStore`] port.
//!
//! ## Responsibilities
//! - Hold the **registry** of appliance names, the **slot bindings**, and
//!   the **last-operated slot** pointer for the lifetime of the process
//! - Maintain a secondary index (appliance name → slot) so the
//!   "is this appliance already bound" check is a direct lookup rather
//!   than a scan over binding values
//!
//! Nothing here persists: restarting the process loses all registrations
//! and bindings. The store is not internally synchronized — the hub
//! service holds it behind a single lock and serializes every operation.

use std::collections::{HashMap, HashSet};

use homehub_app::ports::StateStore;
use homehub_domain::appliance::{Appliance, ApplianceStatus};
use homehub_domain::error::HomeHubError;
use homehub_domain::id::{ApplianceName, SlotId};

/// Process-lifetime state store backed by plain hash collections.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    registry: HashSet<ApplianceName>,
    bindings: HashMap<SlotId, Appliance>,
    slot_by_appliance: HashMap<ApplianceName, SlotId>,
    last_operated: Option<SlotId>,
}

impl InMemoryStateStore {
    /// Create an empty store: no registrations, no bindings, no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStateStore {
    fn is_registered(&self, name: &ApplianceName) -> bool {
        self.registry.contains(name)
    }

    fn register(&mut self, name: ApplianceName) {
        self.registry.insert(name);
    }

    fn is_slot_available(&self, slot: &SlotId) -> bool {
        !self.bindings.contains_key(slot)
    }

    fn is_appliance_bound(&self, name: &ApplianceName) -> bool {
        self.slot_by_appliance.contains_key(name)
    }

    fn bind(&mut self, slot: SlotId, name: ApplianceName) {
        self.slot_by_appliance.insert(name.clone(), slot.clone());
        self.bindings.insert(slot, Appliance::new(name));
    }

    fn set_status(
        &mut self,
        slot: &SlotId,
        status: ApplianceStatus,
    ) -> Result<Appliance, HomeHubError> {
        let Some(appliance) = self.bindings.get_mut(slot) else {
            return Err(HomeHubError::SlotNotBound { slot: slot.clone() });
        };
        appliance.status = status;
        let updated = appliance.clone();
        self.last_operated = Some(slot.clone());
        Ok(updated)
    }

    fn bound_slots(&self) -> Vec<SlotId> {
        self.bindings.keys().cloned().collect()
    }

    fn undo_last(&mut self) -> Result<Appliance, HomeHubError> {
        let Some(slot) = self.last_operated.clone() else {
            return Err(HomeHubError::NoPriorOperation);
        };
        let Some(appliance) = self.bindings.get(&slot) else {
            // Bindings are never removed, so a recorded slot stays bound.
            return Err(HomeHubError::SlotNotBound { slot });
        };
        let flipped = appliance.status.toggled();
        self.set_status(&slot, flipped)
    }

    fn last_operated_slot(&self) -> Option<SlotId> {
        self.last_operated.clone()
    }
}
