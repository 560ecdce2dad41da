use std::sync::Arc;

use crate::modules::upgrades::adapters::outbound::psa::PsaApi;
use crate::modules::upgrades::adapters::outbound::ticketing_client::{
    TicketSettings, TicketingClient,
};
use crate::modules::upgrades::use_cases::add_workstation::handler::AddWorkstationHandler;
use crate::modules::upgrades::use_cases::create_project_ticket::handler::CreateProjectTicketHandler;
use crate::modules::upgrades::use_cases::create_project_ticket::in_flight::InFlightClients;
use crate::modules::upgrades::use_cases::delete_workstation::handler::DeleteWorkstationHandler;
use crate::modules::upgrades::use_cases::edit_workstation::handler::EditWorkstationHandler;
use crate::modules::upgrades::use_cases::export_workstations::handler::ExportWorkstationsHandler;
use crate::modules::upgrades::use_cases::import_workstations::handler::ImportWorkstationsHandler;
use crate::modules::upgrades::use_cases::list_dashboard::handler::DashboardQueryHandler;
use crate::modules::upgrades::use_cases::update_workstation_field::handler::UpdateWorkstationFieldHandler;
use crate::shared::infrastructure::dashboard_store::in_memory::InMemoryDashboardStore;
use crate::shared::infrastructure::live_sessions::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryDashboardStore>,
    pub sessions: Arc<SessionRegistry>,
    pub dashboard_handler: Arc<DashboardQueryHandler<InMemoryDashboardStore>>,
    pub export_handler: Arc<ExportWorkstationsHandler<InMemoryDashboardStore>>,
    pub update_field_handler: Arc<UpdateWorkstationFieldHandler<InMemoryDashboardStore>>,
    pub add_workstation_handler: Arc<AddWorkstationHandler<InMemoryDashboardStore>>,
    pub edit_workstation_handler: Arc<EditWorkstationHandler<InMemoryDashboardStore>>,
    pub delete_workstation_handler: Arc<DeleteWorkstationHandler<InMemoryDashboardStore>>,
    pub import_handler: Arc<ImportWorkstationsHandler<InMemoryDashboardStore>>,
    pub ticket_handler: Arc<CreateProjectTicketHandler<InMemoryDashboardStore, dyn PsaApi>>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryDashboardStore>,
        psa: Arc<dyn PsaApi>,
        tickets: TicketSettings,
    ) -> Self {
        let sessions = Arc::new(SessionRegistry::new());
        Self {
            dashboard_handler: Arc::new(DashboardQueryHandler::new(store.clone())),
            export_handler: Arc::new(ExportWorkstationsHandler::new(store.clone())),
            update_field_handler: Arc::new(UpdateWorkstationFieldHandler::new(
                store.clone(),
                sessions.clone(),
            )),
            add_workstation_handler: Arc::new(AddWorkstationHandler::new(
                store.clone(),
                sessions.clone(),
            )),
            edit_workstation_handler: Arc::new(EditWorkstationHandler::new(
                store.clone(),
                sessions.clone(),
            )),
            delete_workstation_handler: Arc::new(DeleteWorkstationHandler::new(
                store.clone(),
                sessions.clone(),
            )),
            import_handler: Arc::new(ImportWorkstationsHandler::new(
                store.clone(),
                sessions.clone(),
            )),
            ticket_handler: Arc::new(CreateProjectTicketHandler::new(
                store.clone(),
                TicketingClient::new(psa, tickets),
                Arc::new(InFlightClients::new()),
            )),
            store,
            sessions,
        }
    }
}
