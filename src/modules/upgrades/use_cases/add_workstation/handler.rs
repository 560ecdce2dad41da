use std::sync::Arc;

use tracing::info;

use crate::modules::upgrades::core::live_event::LiveEvent;
use crate::modules::upgrades::core::workstation::{
    NewWorkstation, PLACEHOLDER_STATUS, STATUS_COMPLETED, Workstation,
};
use crate::modules::upgrades::use_cases::add_workstation::command::AddWorkstation;
use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::shared::infrastructure::dashboard_store::DashboardStore;
use crate::shared::infrastructure::live_sessions::SessionRegistry;

pub struct AddWorkstationHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    store: Arc<TStore>,
    sessions: Arc<SessionRegistry>,
}

impl<TStore> AddWorkstationHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    pub fn new(store: Arc<TStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(&self, command: AddWorkstation) -> Result<Workstation, ApplicationError> {
        if command.computer_name.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "computer name is required".into(),
            ));
        }
        let client = self
            .store
            .get_client(command.client_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("client {}", command.client_id)))?;

        let status = command
            .status
            .map(|status| status.trim().to_string())
            .filter(|status| !status.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_STATUS.to_string());
        let completed_at = (status == STATUS_COMPLETED).then_some(command.requested_at);

        let workstation = self
            .store
            .insert_workstation(NewWorkstation {
                client_id: client.id,
                computer_name: command.computer_name,
                ram_gb: command.ram_gb,
                processor_name: command.processor_name,
                diskspace_remaining_gb: command.diskspace_remaining_gb,
                status,
                technician: command.technician,
                notes: command.notes,
                updated_in_automate: false,
                completed_at,
            })
            .await?;

        info!(workstation = workstation.id, client = %client.name, "workstation added");
        self.sessions.broadcast(&LiveEvent::Refresh).await;
        Ok(workstation)
    }
}
