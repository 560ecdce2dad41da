use thiserror::Error;

use crate::modules::upgrades::adapters::outbound::psa::RemoteCompany;
use crate::modules::upgrades::adapters::outbound::ticketing_client::RemoteRejected;
use crate::shared::core::primitives::{ClientId, TicketId};
use crate::shared::infrastructure::dashboard_store::StoreError;

/// A created ticket. `warnings` lists technicians that could not be
/// attached to it; the ticket exists either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCreated {
    pub ticket_id: TicketId,
    pub company: RemoteCompany,
    pub warnings: Vec<String>,
}

impl TicketCreated {
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum CreateTicketError {
    #[error("client {0} not found")]
    ClientNotFound(ClientId),

    #[error("a ticket for client {0} is already being created")]
    AlreadyInProgress(ClientId),

    #[error("No workstations found for {0}")]
    NoWorkstations(String),

    #[error("Not all workstations for {0} have a status and technician assigned")]
    NotReady(String),

    #[error("Company '{0}' not found in ConnectWise")]
    CompanyNotFound(String),

    #[error("Failed to create ticket: {0}")]
    TicketRejected(#[from] RemoteRejected),

    #[error(transparent)]
    Store(#[from] StoreError),
}
