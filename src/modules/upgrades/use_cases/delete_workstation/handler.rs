use std::sync::Arc;

use tracing::info;

use crate::modules::upgrades::core::live_event::LiveEvent;
use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::modules::upgrades::use_cases::delete_workstation::command::DeleteWorkstation;
use crate::shared::infrastructure::dashboard_store::DashboardStore;
use crate::shared::infrastructure::live_sessions::SessionRegistry;

pub struct DeleteWorkstationHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    store: Arc<TStore>,
    sessions: Arc<SessionRegistry>,
}

impl<TStore> DeleteWorkstationHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    pub fn new(store: Arc<TStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(&self, command: DeleteWorkstation) -> Result<(), ApplicationError> {
        let id = command.workstation_id;
        if !self.store.delete_workstation(id).await? {
            return Err(ApplicationError::NotFound(format!("workstation {id}")));
        }
        info!(workstation = id, "workstation deleted");
        self.sessions.broadcast(&LiveEvent::Refresh).await;
        Ok(())
    }
}
