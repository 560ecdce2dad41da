use chrono::{DateTime, Utc};

use crate::shared::core::primitives::WorkstationId;

/// Full rewrite of a workstation's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditWorkstation {
    pub workstation_id: WorkstationId,
    pub computer_name: String,
    pub ram_gb: String,
    pub processor_name: String,
    pub diskspace_remaining_gb: String,
    pub status: String,
    pub technician: String,
    pub notes: String,
    pub requested_at: DateTime<Utc>,
}
