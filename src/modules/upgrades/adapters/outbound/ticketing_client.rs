// Caller-facing view of the PSA: lookups are lenient and collapse every
// remote failure into "not found"; writes collapse transport failures and
// rejections into `RemoteRejected`.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::modules::upgrades::adapters::outbound::psa::{
    NewTicket, PsaApi, PsaError, RemoteCompany, RemoteMember, ScheduleEntry,
};
use crate::modules::upgrades::core::resolution::{
    CompanyStrategy, FUZZY_PAGE_SIZE, MemberStrategy, best_fuzzy_match, member_identifier,
};
use crate::modules::upgrades::core::ticket_description::TICKET_SUMMARY;
use crate::shared::core::primitives::{CompanyId, MemberId, TicketId};

pub const DEFAULT_BOARD: &str = "Professional Services";
pub const DEFAULT_TEAM: &str = "Service Team";
pub const DEFAULT_TIME_ZONE: &str = "GMT-8/Pacific Time: US & Canada (UTC-07)";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RemoteRejected(pub String);

impl From<PsaError> for RemoteRejected {
    fn from(err: PsaError) -> Self {
        match err {
            PsaError::Rejected { detail, .. } => Self(detail),
            other => Self(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSettings {
    pub board: String,
    pub team: String,
    pub time_zone: String,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            board: DEFAULT_BOARD.into(),
            team: DEFAULT_TEAM.into(),
            time_zone: DEFAULT_TIME_ZONE.into(),
        }
    }
}

/// How a technician ended up on the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Scheduled,
    ResourceAdded,
}

pub struct TicketingClient<TPsa>
where
    TPsa: PsaApi + ?Sized,
{
    psa: Arc<TPsa>,
    settings: TicketSettings,
}

impl<TPsa> TicketingClient<TPsa>
where
    TPsa: PsaApi + ?Sized,
{
    pub fn new(psa: Arc<TPsa>, settings: TicketSettings) -> Self {
        Self { psa, settings }
    }

    pub async fn resolve_company(&self, name: &str) -> Option<RemoteCompany> {
        for strategy in CompanyStrategy::ORDER {
            let found = match strategy {
                CompanyStrategy::ExactName => match self.psa.companies_by_name(name).await {
                    Ok(companies) => companies.into_iter().next(),
                    Err(err) => {
                        warn!(company = name, error = %err, "exact company lookup failed");
                        None
                    }
                },
                CompanyStrategy::FuzzyName => match self.psa.all_companies(FUZZY_PAGE_SIZE).await
                {
                    Ok(companies) => {
                        best_fuzzy_match(name, &companies, |company| company.name.as_str())
                            .cloned()
                    }
                    Err(err) => {
                        warn!(company = name, error = %err, "company scan failed");
                        None
                    }
                },
            };
            if let Some(company) = found {
                debug!(company = name, ?strategy, matched = %company.name, "company resolved");
                return Some(company);
            }
        }
        None
    }

    pub async fn resolve_member(&self, name: &str) -> Option<RemoteMember> {
        for strategy in MemberStrategy::ORDER {
            let result = match strategy {
                MemberStrategy::Identifier => {
                    self.psa
                        .members_by_identifier(&member_identifier(name))
                        .await
                }
                MemberStrategy::FirstOrLastName => {
                    self.psa.members_by_first_or_last_name(name.trim()).await
                }
            };
            match result {
                Ok(members) => {
                    if let Some(member) = members.into_iter().next() {
                        debug!(technician = name, ?strategy, member_id = member.id, "member resolved");
                        return Some(member);
                    }
                }
                Err(err) => warn!(technician = name, ?strategy, error = %err, "member lookup failed"),
            }
        }
        None
    }

    pub async fn create_ticket(
        &self,
        company_id: CompanyId,
        description: String,
        resource_names: &BTreeSet<String>,
    ) -> Result<TicketId, RemoteRejected> {
        let ticket = NewTicket {
            company_id,
            summary: TICKET_SUMMARY.to_string(),
            description,
            board: self.settings.board.clone(),
            team: self.settings.team.clone(),
            resources: resource_names.iter().cloned().collect(),
        };
        Ok(self.psa.create_ticket(&ticket).await?)
    }

    /// Schedules the member on the ticket, falling back to adding them to the
    /// ticket's resource list.
    pub async fn assign_technician(
        &self,
        ticket_id: TicketId,
        member_id: MemberId,
        member_name: &str,
    ) -> Result<Assignment, RemoteRejected> {
        let entry = ScheduleEntry {
            ticket_id,
            member_id,
            date_start: Utc::now(),
            time_zone: self.settings.time_zone.clone(),
        };
        let schedule_err = match self.psa.add_schedule_entry(&entry).await {
            Ok(()) => return Ok(Assignment::Scheduled),
            Err(err) => err,
        };

        info!(ticket_id, member_id, error = %schedule_err, "schedule entry refused; patching resources");
        match self.psa.add_ticket_resource(ticket_id, member_name).await {
            Ok(()) => Ok(Assignment::ResourceAdded),
            Err(patch_err) => Err(RemoteRejected(format!(
                "schedule entry: {}; resource update: {}",
                RemoteRejected::from(schedule_err),
                RemoteRejected::from(patch_err)
            ))),
        }
    }
}
