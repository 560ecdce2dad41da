use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{ClientId, WorkstationId};

pub const PLACEHOLDER_STATUS: &str = "- Select Status -";
pub const STATUS_ASSIGNED: &str = "Assigned";
pub const STATUS_READY_TO_UPGRADE: &str = "Ready to Upgrade";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";

/// Statuses offered by the dashboard, in display order. Stored statuses are
/// free text and may fall outside this list.
pub const STATUS_LIST: [&str; 10] = [
    PLACEHOLDER_STATUS,
    STATUS_ASSIGNED,
    STATUS_READY_TO_UPGRADE,
    "Scheduled",
    STATUS_IN_PROGRESS,
    "Waiting on Product",
    "Must Quote",
    "Awaiting Client Response",
    "Needs RAM Upgrade",
    STATUS_COMPLETED,
];

pub const TECHNICIANS: [&str; 5] = ["Brian", "Ed", "Steven", "Roy", "Jessica"];

/// Reads the "Updated in Automate" flag: `yes`, `true` or `1` in any case.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1"
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workstation {
    pub id: WorkstationId,
    pub client_id: ClientId,
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

impl Workstation {
    pub fn is_completed(&self) -> bool {
        self.status.trim() == STATUS_COMPLETED
    }

    /// Moves the workstation to `status` (stored trimmed), keeping the
    /// completion timestamp in step: entering "Completed" stamps `now`,
    /// leaving it clears both the timestamp and the automate flag.
    pub fn set_status(&mut self, status: &str, now: DateTime<Utc>) {
        let was_completed = self.is_completed();
        self.status = status.trim().to_string();

        if self.is_completed() {
            self.completed_at.get_or_insert(now);
        } else {
            self.completed_at = None;
            if was_completed {
                self.updated_in_automate = false;
            }
        }
    }

    pub fn view(&self) -> WorkstationView<'_> {
        WorkstationView {
            computer_name: &self.computer_name,
            processor_name: &self.processor_name,
            ram_gb: &self.ram_gb,
            diskspace_remaining_gb: &self.diskspace_remaining_gb,
            status: &self.status,
            technician: &self.technician,
            notes: &self.notes,
        }
    }
}

/// Plain-value snapshot of the fields readiness and ticket descriptions read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkstationView<'a> {
    pub computer_name: &'a str,
    pub processor_name: &'a str,
    pub ram_gb: &'a str,
    pub diskspace_remaining_gb: &'a str,
    pub status: &'a str,
    pub technician: &'a str,
    pub notes: &'a str,
}

/// Descriptive fields of a workstation that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkstation {
    pub client_id: ClientId,
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
