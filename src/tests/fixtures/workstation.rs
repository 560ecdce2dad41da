// Builders for workstation-shaped test data. Defaults describe a machine that
// is mid-upgrade with a technician assigned.

use chrono::{DateTime, Utc};

use crate::modules::upgrades::core::workstation::{NewWorkstation, Workstation};
use crate::shared::core::primitives::{ClientId, WorkstationId};
use crate::shared::infrastructure::dashboard_store::SnapshotRow;

pub struct WorkstationBuilder {
    inner: Workstation,
}

impl Default for WorkstationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WorkstationBuilder {
    pub fn new() -> Self {
        Self {
            inner: Workstation {
                id: 1,
                client_id: 1,
                computer_name: "WS-0001".to_string(),
                ram_gb: "16".to_string(),
                processor_name: "Intel Core i5-8500".to_string(),
                diskspace_remaining_gb: "120".to_string(),
                status: "In Progress".to_string(),
                technician: "Brian".to_string(),
                notes: String::new(),
                updated_in_automate: false,
                completed_at: None,
            },
        }
    }

    pub fn id(mut self, v: WorkstationId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn client_id(mut self, v: ClientId) -> Self {
        self.inner.client_id = v;
        self
    }

    pub fn computer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.computer_name = v.into();
        self
    }

    pub fn ram_gb(mut self, v: impl Into<String>) -> Self {
        self.inner.ram_gb = v.into();
        self
    }

    pub fn processor_name(mut self, v: impl Into<String>) -> Self {
        self.inner.processor_name = v.into();
        self
    }

    pub fn diskspace_remaining_gb(mut self, v: impl Into<String>) -> Self {
        self.inner.diskspace_remaining_gb = v.into();
        self
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.inner.status = v.into();
        self
    }

    pub fn technician(mut self, v: impl Into<String>) -> Self {
        self.inner.technician = v.into();
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = v.into();
        self
    }

    pub fn updated_in_automate(mut self, v: bool) -> Self {
        self.inner.updated_in_automate = v;
        self
    }

    pub fn completed_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.completed_at = Some(v);
        self
    }

    pub fn build(self) -> Workstation {
        self.inner
    }
}

pub struct NewWorkstationBuilder {
    inner: NewWorkstation,
}

#[allow(dead_code)]
impl NewWorkstationBuilder {
    pub fn new(client_id: ClientId) -> Self {
        let template = WorkstationBuilder::new().build();
        Self {
            inner: NewWorkstation {
                client_id,
                computer_name: template.computer_name,
                ram_gb: template.ram_gb,
                processor_name: template.processor_name,
                diskspace_remaining_gb: template.diskspace_remaining_gb,
                status: template.status,
                technician: template.technician,
                notes: template.notes,
                updated_in_automate: false,
                completed_at: None,
            },
        }
    }

    pub fn computer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.computer_name = v.into();
        self
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.inner.status = v.into();
        self
    }

    pub fn technician(mut self, v: impl Into<String>) -> Self {
        self.inner.technician = v.into();
        self
    }

    pub fn build(self) -> NewWorkstation {
        self.inner
    }
}

pub struct SnapshotRowBuilder {
    inner: SnapshotRow,
}

#[allow(dead_code)]
impl SnapshotRowBuilder {
    pub fn new(client_name: impl Into<String>) -> Self {
        let template = WorkstationBuilder::new().build();
        Self {
            inner: SnapshotRow {
                client_name: client_name.into(),
                computer_name: template.computer_name,
                ram_gb: template.ram_gb,
                processor_name: template.processor_name,
                diskspace_remaining_gb: template.diskspace_remaining_gb,
                status: template.status,
                technician: template.technician,
                notes: template.notes,
                updated_in_automate: false,
                completed_at: None,
            },
        }
    }

    pub fn computer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.computer_name = v.into();
        self
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.inner.status = v.into();
        self
    }

    pub fn technician(mut self, v: impl Into<String>) -> Self {
        self.inner.technician = v.into();
        self
    }

    pub fn build(self) -> SnapshotRow {
        self.inner
    }
}
