use serde::{Deserialize, Serialize};

use crate::modules::upgrades::core::stats::DashboardStats;
use crate::modules::upgrades::core::workstation::Workstation;
use crate::shared::core::primitives::ClientId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSection {
    pub id: ClientId,
    pub name: String,
    /// Readiness of the client's whole batch, regardless of filters.
    pub ready: bool,
    pub workstations: Vec<Workstation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub clients: Vec<ClientSection>,
    pub stats: DashboardStats,
    pub statuses: Vec<String>,
    pub technicians: Vec<String>,
    pub all_clients: Vec<String>,
    pub all_ram: Vec<String>,
}
