use chrono::{DateTime, Utc};

use crate::shared::core::primitives::WorkstationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWorkstationField {
    pub workstation_id: WorkstationId,
    pub field: String,
    pub value: String,
    pub requested_at: DateTime<Utc>,
}
