// Port onto the PSA (ConnectWise) REST contract.
//
// Every operation maps to exactly one remote request. Fallback chains and
// leniency rules live in the ticketing client on top of this port, so a fake
// can count calls per request kind.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::shared::core::primitives::{CompanyId, MemberId, TicketId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PsaError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("PSA answered {status}: {detail}")]
    Rejected { status: u16, detail: String },

    #[error("undecodable PSA response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteCompany {
    pub id: CompanyId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMember {
    pub id: MemberId,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub company_id: CompanyId,
    pub summary: String,
    pub description: String,
    pub board: String,
    pub team: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub ticket_id: TicketId,
    pub member_id: MemberId,
    pub date_start: DateTime<Utc>,
    pub time_zone: String,
}

#[async_trait]
pub trait PsaApi: Send + Sync {
    async fn companies_by_name(&self, name: &str) -> Result<Vec<RemoteCompany>, PsaError>;
    async fn all_companies(&self, page_size: usize) -> Result<Vec<RemoteCompany>, PsaError>;

    async fn members_by_identifier(&self, identifier: &str)
    -> Result<Vec<RemoteMember>, PsaError>;
    async fn members_by_first_or_last_name(
        &self,
        name: &str,
    ) -> Result<Vec<RemoteMember>, PsaError>;

    /// Succeeds only on 201 and yields the id of the created ticket.
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketId, PsaError>;
    /// Succeeds only on 201.
    async fn add_schedule_entry(&self, entry: &ScheduleEntry) -> Result<(), PsaError>;
    /// Adds `member_name` to the ticket's resource list; 200 or 201.
    async fn add_ticket_resource(
        &self,
        ticket_id: TicketId,
        member_name: &str,
    ) -> Result<(), PsaError>;
}

/// Extracts a human readable message from a PSA error body: the top-level
/// `message` followed by one line per entry of `errors`. Falls back to the raw
/// body when it is not a JSON object.
pub fn decode_remote_error(body: &str) -> String {
    let Ok(Value::Object(payload)) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    let mut detail = match payload.get("message") {
        Some(Value::String(message)) => message.clone(),
        _ => body.to_string(),
    };
    if let Some(Value::Array(errors)) = payload.get("errors") {
        for error in errors {
            let message = error.get("message").and_then(Value::as_str).unwrap_or("");
            detail.push('\n');
            detail.push_str(message);
        }
    }
    detail
}
