//! Success payloads returned by hub operations.
//!
//! Each payload carries the catalog-rendered confirmation message next to
//! the affected identifiers; the HTTP status belongs to the boundary, not
//! to these types.

use serde::Serialize;

use homehub_domain::appliance::Appliance;
use homehub_domain::id::{ApplianceName, SlotId};

/// Outcome of a successful appliance registration.
#[derive(Debug, Clone, Serialize)]
pub struct ApplianceRegistered {
    pub appliance: ApplianceName,
    pub message: String,
}

/// Outcome of successfully binding a remote slot to an appliance.
#[derive(Debug, Clone, Serialize)]
pub struct SlotBound {
    pub slot: SlotId,
    pub appliance: ApplianceName,
    pub message: String,
}

/// Outcome of operating an appliance, including via undo.
///
/// Carries the appliance's post-operation state as the flattened `name`
/// and `status` fields.
#[derive(Debug, Clone, Serialize)]
pub struct ApplianceOperated {
    #[serde(flatten)]
    pub appliance: Appliance,
    pub message: String,
}
