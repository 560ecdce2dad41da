use serde::{Deserialize, Serialize};

use crate::modules::upgrades::core::readiness::is_actionable_status;
use crate::modules::upgrades::core::workstation::{
    STATUS_IN_PROGRESS, STATUS_READY_TO_UPGRADE, Workstation,
};

/// Aggregate counters shown above the dashboard and pushed with field updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub ready_to_upgrade: usize,
    pub not_started: usize,
    pub completed_synced: usize,
}

impl DashboardStats {
    pub fn compute<'a>(workstations: impl IntoIterator<Item = &'a Workstation>) -> Self {
        workstations
            .into_iter()
            .fold(Self::default(), |mut stats, workstation| {
                stats.total += 1;
                if workstation.is_completed() {
                    stats.completed += 1;
                    if workstation.updated_in_automate {
                        stats.completed_synced += 1;
                    }
                }
                match workstation.status.trim() {
                    STATUS_IN_PROGRESS => stats.in_progress += 1,
                    STATUS_READY_TO_UPGRADE => stats.ready_to_upgrade += 1,
                    status if !is_actionable_status(status) => stats.not_started += 1,
                    _ => {}
                }
                stats
            })
    }
}
