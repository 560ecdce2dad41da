use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::upgrades::adapters::outbound::psa::{
    NewTicket, PsaApi, PsaError, RemoteCompany, RemoteMember, ScheduleEntry,
};
use crate::shared::core::primitives::{CompanyId, MemberId, TicketId};

const FIRST_TICKET_ID: TicketId = 1000;

/// One kind of remote request, for call-count assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsaCall {
    CompaniesByName,
    AllCompanies,
    MembersByIdentifier,
    MembersByFirstOrLastName,
    CreateTicket,
    AddScheduleEntry,
    AddTicketResource,
}

#[derive(Default)]
struct Recorded {
    calls: HashMap<PsaCall, usize>,
    tickets: Vec<(TicketId, NewTicket)>,
    schedule_entries: Vec<ScheduleEntry>,
    resource_patches: Vec<(TicketId, String)>,
    last_ticket_id: Option<TicketId>,
}

/// PSA stand-in holding a fixed directory of companies and members and
/// recording every write it accepts.
#[derive(Default)]
pub struct InMemoryPsa {
    companies: Vec<RemoteCompany>,
    members: Vec<RemoteMember>,
    recorded: Mutex<Recorded>,
    is_offline: bool,
    rejects_tickets: bool,
    rejects_schedule_entries: bool,
    rejects_resource_patches: bool,
}

impl InMemoryPsa {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_company(mut self, id: CompanyId, name: impl Into<String>) -> Self {
        self.companies.push(RemoteCompany {
            id,
            name: name.into(),
        });
        self
    }

    /// Adds a member whose identifier follows the `first.last` convention.
    pub fn with_member(mut self, id: MemberId, first_name: &str, last_name: &str) -> Self {
        let identifier = [first_name, last_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.to_lowercase())
            .collect::<Vec<_>>()
            .join(".");
        self.members.push(RemoteMember {
            id,
            identifier,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        });
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn reject_tickets(&mut self) {
        self.rejects_tickets = true;
    }

    pub fn reject_schedule_entries(&mut self) {
        self.rejects_schedule_entries = true;
    }

    pub fn reject_resource_patches(&mut self) {
        self.rejects_resource_patches = true;
    }

    pub async fn calls(&self, call: PsaCall) -> usize {
        self.recorded
            .lock()
            .await
            .calls
            .get(&call)
            .copied()
            .unwrap_or(0)
    }

    pub async fn tickets(&self) -> Vec<(TicketId, NewTicket)> {
        self.recorded.lock().await.tickets.clone()
    }

    pub async fn schedule_entries(&self) -> Vec<ScheduleEntry> {
        self.recorded.lock().await.schedule_entries.clone()
    }

    pub async fn resource_patches(&self) -> Vec<(TicketId, String)> {
        self.recorded.lock().await.resource_patches.clone()
    }

    async fn record(&self, call: PsaCall) -> Result<(), PsaError> {
        *self.recorded.lock().await.calls.entry(call).or_default() += 1;
        if self.is_offline {
            return Err(PsaError::Transport("PSA offline".into()));
        }
        Ok(())
    }
}

fn rejected(detail: &str) -> PsaError {
    PsaError::Rejected {
        status: 400,
        detail: detail.to_string(),
    }
}

#[async_trait]
impl PsaApi for InMemoryPsa {
    async fn companies_by_name(&self, name: &str) -> Result<Vec<RemoteCompany>, PsaError> {
        self.record(PsaCall::CompaniesByName).await?;
        Ok(self
            .companies
            .iter()
            .filter(|company| company.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect())
    }

    async fn all_companies(&self, page_size: usize) -> Result<Vec<RemoteCompany>, PsaError> {
        self.record(PsaCall::AllCompanies).await?;
        Ok(self.companies.iter().take(page_size).cloned().collect())
    }

    async fn members_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Vec<RemoteMember>, PsaError> {
        self.record(PsaCall::MembersByIdentifier).await?;
        Ok(self
            .members
            .iter()
            .filter(|member| member.identifier.eq_ignore_ascii_case(identifier))
            .cloned()
            .collect())
    }

    async fn members_by_first_or_last_name(
        &self,
        name: &str,
    ) -> Result<Vec<RemoteMember>, PsaError> {
        self.record(PsaCall::MembersByFirstOrLastName).await?;
        Ok(self
            .members
            .iter()
            .filter(|member| {
                member.first_name.eq_ignore_ascii_case(name)
                    || member.last_name.eq_ignore_ascii_case(name)
            })
            .cloned()
            .collect())
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketId, PsaError> {
        self.record(PsaCall::CreateTicket).await?;
        if self.rejects_tickets {
            return Err(rejected("ticket object is invalid"));
        }
        let mut recorded = self.recorded.lock().await;
        let id = recorded
            .last_ticket_id
            .map_or(FIRST_TICKET_ID, |last| last + 1);
        recorded.last_ticket_id = Some(id);
        recorded.tickets.push((id, ticket.clone()));
        Ok(id)
    }

    async fn add_schedule_entry(&self, entry: &ScheduleEntry) -> Result<(), PsaError> {
        self.record(PsaCall::AddScheduleEntry).await?;
        if self.rejects_schedule_entries {
            return Err(rejected("schedule entry is invalid"));
        }
        self.recorded.lock().await.schedule_entries.push(entry.clone());
        Ok(())
    }

    async fn add_ticket_resource(
        &self,
        ticket_id: TicketId,
        member_name: &str,
    ) -> Result<(), PsaError> {
        self.record(PsaCall::AddTicketResource).await?;
        if self.rejects_resource_patches {
            return Err(rejected("resource could not be added"));
        }
        self.recorded
            .lock()
            .await
            .resource_patches
            .push((ticket_id, member_name.to_string()));
        Ok(())
    }
}
