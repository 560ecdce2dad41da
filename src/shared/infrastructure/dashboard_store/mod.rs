use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::modules::upgrades::core::workstation::{Client, NewWorkstation, Workstation};
use crate::shared::core::primitives::{ClientId, WorkstationId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// One imported row, keyed by client display name rather than id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub client_name: String,
    pub computer_name: String,
    pub ram_gb: String,
    pub processor_name: String,
    pub diskspace_remaining_gb: String,
    pub status: String,
    pub technician: String,
    pub notes: String,
    pub updated_in_automate: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub clients: usize,
    pub workstations: usize,
}

/// Persistent record of clients and their workstations.
///
/// Writes are whole-record: `save_workstation` overwrites whatever is stored,
/// so two concurrent edits of the same workstation are last-write-wins.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>, StoreError>;
    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, StoreError>;

    async fn list_workstations(&self) -> Result<Vec<Workstation>, StoreError>;
    async fn workstations_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Workstation>, StoreError>;
    async fn get_workstation(&self, id: WorkstationId) -> Result<Option<Workstation>, StoreError>;

    async fn insert_workstation(&self, new: NewWorkstation) -> Result<Workstation, StoreError>;
    async fn save_workstation(&self, workstation: Workstation) -> Result<(), StoreError>;
    async fn delete_workstation(&self, id: WorkstationId) -> Result<bool, StoreError>;

    /// Replaces every client and workstation in one commit. On error nothing
    /// has changed.
    async fn replace_snapshot(&self, rows: Vec<SnapshotRow>) -> Result<SnapshotSummary, StoreError>;
}

pub mod in_memory;
