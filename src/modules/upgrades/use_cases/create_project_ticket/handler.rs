// One-shot ticket creation for a client whose whole batch is ready.
//
// Single pass with no persisted intermediate state: load, gate, resolve the
// company, create the ticket, then attach each technician. Only the company
// and the ticket are fatal; technician problems become warnings.

use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::upgrades::adapters::outbound::psa::PsaApi;
use crate::modules::upgrades::adapters::outbound::ticketing_client::TicketingClient;
use crate::modules::upgrades::core::readiness::is_ready;
use crate::modules::upgrades::core::ticket_description::{build_description, distinct_technicians};
use crate::modules::upgrades::core::workstation::WorkstationView;
use crate::modules::upgrades::use_cases::create_project_ticket::command::CreateProjectTicket;
use crate::modules::upgrades::use_cases::create_project_ticket::in_flight::InFlightClients;
use crate::modules::upgrades::use_cases::create_project_ticket::outcome::{
    CreateTicketError, TicketCreated,
};
use crate::shared::infrastructure::dashboard_store::DashboardStore;

pub struct CreateProjectTicketHandler<TStore, TPsa>
where
    TStore: DashboardStore + 'static,
    TPsa: PsaApi + ?Sized + 'static,
{
    store: Arc<TStore>,
    ticketing: TicketingClient<TPsa>,
    in_flight: Arc<InFlightClients>,
}

impl<TStore, TPsa> CreateProjectTicketHandler<TStore, TPsa>
where
    TStore: DashboardStore + 'static,
    TPsa: PsaApi + ?Sized + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        ticketing: TicketingClient<TPsa>,
        in_flight: Arc<InFlightClients>,
    ) -> Self {
        Self {
            store,
            ticketing,
            in_flight,
        }
    }

    pub async fn handle(
        &self,
        command: CreateProjectTicket,
    ) -> Result<TicketCreated, CreateTicketError> {
        let client_id = command.client_id;
        let _token = self
            .in_flight
            .try_acquire(client_id)
            .ok_or(CreateTicketError::AlreadyInProgress(client_id))?;

        let client = self
            .store
            .get_client(client_id)
            .await?
            .ok_or(CreateTicketError::ClientNotFound(client_id))?;
        let workstations = self.store.workstations_for_client(client_id).await?;
        if workstations.is_empty() {
            return Err(CreateTicketError::NoWorkstations(client.name));
        }
        let views: Vec<WorkstationView<'_>> = workstations.iter().map(|w| w.view()).collect();
        if !is_ready(&views) {
            return Err(CreateTicketError::NotReady(client.name));
        }

        let company = self
            .ticketing
            .resolve_company(&client.name)
            .await
            .ok_or_else(|| CreateTicketError::CompanyNotFound(client.name.clone()))?;
        info!(client = %client.name, company = %company.name, company_id = company.id, "company resolved");

        let technicians = distinct_technicians(&views);
        let ticket_id = self
            .ticketing
            .create_ticket(company.id, build_description(&views), &technicians)
            .await?;
        info!(client = %client.name, ticket_id, "project ticket created");

        let mut warnings = Vec::new();
        for technician in &technicians {
            let Some(member) = self.ticketing.resolve_member(technician).await else {
                let warning = format!("Could not find member {technician} in ConnectWise");
                warn!(ticket_id, "{warning}");
                warnings.push(warning);
                continue;
            };
            match self
                .ticketing
                .assign_technician(ticket_id, member.id, technician)
                .await
            {
                Ok(assignment) => info!(ticket_id, technician = %technician, ?assignment, "technician assigned"),
                Err(err) => {
                    let warning = format!("Failed to assign {technician} to ticket {ticket_id}: {err}");
                    warn!(ticket_id, "{warning}");
                    warnings.push(warning);
                }
            }
        }

        Ok(TicketCreated {
            ticket_id,
            company,
            warnings,
        })
    }
}
