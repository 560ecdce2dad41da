use std::sync::Arc;

use tracing::info;

use crate::modules::upgrades::core::live_event::LiveEvent;
use crate::modules::upgrades::core::workstation::Workstation;
use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::modules::upgrades::use_cases::edit_workstation::command::EditWorkstation;
use crate::shared::infrastructure::dashboard_store::DashboardStore;
use crate::shared::infrastructure::live_sessions::SessionRegistry;

pub struct EditWorkstationHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    store: Arc<TStore>,
    sessions: Arc<SessionRegistry>,
}

impl<TStore> EditWorkstationHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    pub fn new(store: Arc<TStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(&self, command: EditWorkstation) -> Result<Workstation, ApplicationError> {
        if command.computer_name.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "computer name is required".into(),
            ));
        }
        let id = command.workstation_id;
        let mut workstation = self
            .store
            .get_workstation(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("workstation {id}")))?;

        workstation.computer_name = command.computer_name;
        workstation.ram_gb = command.ram_gb;
        workstation.processor_name = command.processor_name;
        workstation.diskspace_remaining_gb = command.diskspace_remaining_gb;
        workstation.technician = command.technician;
        workstation.notes = command.notes;
        workstation.set_status(&command.status, command.requested_at);

        self.store.save_workstation(workstation.clone()).await?;
        info!(workstation = id, "workstation edited");
        self.sessions.broadcast(&LiveEvent::Refresh).await;
        Ok(workstation)
    }
}
