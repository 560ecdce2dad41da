use chrono::{DateTime, Utc};

use crate::shared::core::primitives::ClientId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWorkstation {
    pub client_id: ClientId,
    pub computer_name: String,
    pub ram_gb: String,
    pub processor_name: String,
    pub diskspace_remaining_gb: String,
    /// Placeholder status when absent or blank.
    pub status: Option<String>,
    pub technician: String,
    pub notes: String,
    pub requested_at: DateTime<Utc>,
}
