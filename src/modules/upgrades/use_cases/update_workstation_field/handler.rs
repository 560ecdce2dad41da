use std::sync::Arc;

use tracing::debug;

use crate::modules::upgrades::core::live_event::LiveEvent;
use crate::modules::upgrades::core::stats::DashboardStats;
use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::modules::upgrades::use_cases::update_workstation_field::command::UpdateWorkstationField;
use crate::modules::upgrades::use_cases::update_workstation_field::decide::decide_update;
use crate::modules::upgrades::use_cases::update_workstation_field::decision::Decision;
use crate::shared::infrastructure::dashboard_store::DashboardStore;
use crate::shared::infrastructure::live_sessions::SessionRegistry;

pub struct UpdateWorkstationFieldHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    store: Arc<TStore>,
    sessions: Arc<SessionRegistry>,
}

impl<TStore> UpdateWorkstationFieldHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    pub fn new(store: Arc<TStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(&self, command: UpdateWorkstationField) -> Result<(), ApplicationError> {
        let id = command.workstation_id;
        let current = self
            .store
            .get_workstation(id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("workstation {id}")))?;

        match decide_update(&current, command) {
            Decision::Accepted {
                workstation,
                field,
                value,
            } => {
                self.store.save_workstation(workstation).await?;
                let stats = DashboardStats::compute(&self.store.list_workstations().await?);
                let report = self
                    .sessions
                    .broadcast(&LiveEvent::FieldUpdate {
                        id,
                        field: field.as_str().to_string(),
                        value,
                        stats,
                    })
                    .await;
                debug!(workstation = id, field = field.as_str(), ?report, "field updated");
                Ok(())
            }
            Decision::Rejected { reason } => Err(ApplicationError::Validation(reason.to_string())),
        }
    }
}
