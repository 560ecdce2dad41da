use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use chrono::SecondsFormat;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::modules::upgrades::adapters::outbound::psa::{
    NewTicket, PsaApi, PsaError, RemoteCompany, RemoteMember, ScheduleEntry, decode_remote_error,
};
use crate::shared::core::primitives::TicketId;

pub const READ_TIMEOUT: Duration = Duration::from_secs(5);
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

const TICKET_STATUS: &str = "New (portal)";
const TICKET_TYPE: &str = "Installation";
const SCHEDULE_TYPE: &str = "S";
const SCHEDULE_WORK_ROLE: &str = "Technician";

/// Static credentials, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectWiseSettings {
    pub base_url: String,
    pub company_id: String,
    pub public_key: String,
    pub private_key: String,
    pub client_id: String,
}

#[derive(Deserialize)]
struct CreatedTicket {
    id: TicketId,
}

/// ConnectWise Manage REST adapter.
pub struct ConnectWiseClient {
    client: reqwest::Client,
    base_url: String,
}

impl ConnectWiseClient {
    pub fn new(settings: &ConnectWiseSettings) -> Result<Self, PsaError> {
        let client = reqwest::Client::builder()
            .default_headers(default_headers(settings)?)
            .build()
            .map_err(|e| PsaError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, PsaError> {
        debug!(path, ?query, "PSA lookup");
        let request = self.client.get(self.url(path)).query(query).timeout(READ_TIMEOUT);
        let response = send(request).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| PsaError::Decode(e.to_string()))
    }
}

fn default_headers(settings: &ConnectWiseSettings) -> Result<HeaderMap, PsaError> {
    let credentials = BASE64_STANDARD.encode(format!(
        "{}+{}:{}",
        settings.company_id, settings.public_key, settings.private_key
    ));
    let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
        .map_err(|e| PsaError::Transport(format!("invalid authorization header: {e}")))?;
    authorization.set_sensitive(true);
    let client_id = HeaderValue::from_str(&settings.client_id)
        .map_err(|e| PsaError::Transport(format!("invalid clientId header: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(HeaderName::from_static("clientid"), client_id);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Quotes a value for a `conditions` expression.
fn condition_literal(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

async fn send(request: RequestBuilder) -> Result<Response, PsaError> {
    request.send().await.map_err(|e| {
        if e.is_timeout() {
            PsaError::Transport(format!("request timed out: {e}"))
        } else {
            PsaError::Transport(e.to_string())
        }
    })
}

async fn expect_status(response: Response, accepted: &[StatusCode]) -> Result<Response, PsaError> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(PsaError::Rejected {
        status: status.as_u16(),
        detail: decode_remote_error(&body),
    })
}

#[async_trait]
impl PsaApi for ConnectWiseClient {
    async fn companies_by_name(&self, name: &str) -> Result<Vec<RemoteCompany>, PsaError> {
        self.fetch_list(
            "/company/companies",
            &[("conditions", format!("name={}", condition_literal(name)))],
        )
        .await
    }

    async fn all_companies(&self, page_size: usize) -> Result<Vec<RemoteCompany>, PsaError> {
        self.fetch_list("/company/companies", &[("pageSize", page_size.to_string())])
            .await
    }

    async fn members_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Vec<RemoteMember>, PsaError> {
        self.fetch_list(
            "/system/members",
            &[(
                "conditions",
                format!("identifier={}", condition_literal(identifier)),
            )],
        )
        .await
    }

    async fn members_by_first_or_last_name(
        &self,
        name: &str,
    ) -> Result<Vec<RemoteMember>, PsaError> {
        let literal = condition_literal(name);
        self.fetch_list(
            "/system/members",
            &[(
                "conditions",
                format!("firstName={literal} OR lastName={literal}"),
            )],
        )
        .await
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketId, PsaError> {
        let body = json!({
            "company": { "id": ticket.company_id },
            "summary": ticket.summary,
            "initialDescription": ticket.description,
            "board": { "name": ticket.board },
            "status": { "name": TICKET_STATUS },
            "type": { "name": TICKET_TYPE },
            "team": { "name": ticket.team },
            "resources": ticket.resources.join(", "),
        });

        info!(company_id = ticket.company_id, board = %ticket.board, "creating PSA ticket");
        let request = self
            .client
            .post(self.url("/service/tickets"))
            .json(&body)
            .timeout(WRITE_TIMEOUT);
        let response = send(request).await?;
        let response = match expect_status(response, &[StatusCode::CREATED]).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "PSA refused ticket");
                return Err(err);
            }
        };
        let created = response
            .json::<CreatedTicket>()
            .await
            .map_err(|e| PsaError::Decode(e.to_string()))?;
        info!(ticket_id = created.id, "PSA ticket created");
        Ok(created.id)
    }

    async fn add_schedule_entry(&self, entry: &ScheduleEntry) -> Result<(), PsaError> {
        let body = json!({
            "objectId": entry.ticket_id,
            "type": { "identifier": SCHEDULE_TYPE },
            "member": { "id": entry.member_id },
            "workRole": { "name": SCHEDULE_WORK_ROLE },
            "dateStart": entry.date_start.to_rfc3339_opts(SecondsFormat::Secs, true),
            "timeZone": { "name": entry.time_zone },
        });

        let request = self
            .client
            .post(self.url("/schedule/entries"))
            .json(&body)
            .timeout(WRITE_TIMEOUT);
        let response = send(request).await?;
        expect_status(response, &[StatusCode::CREATED]).await?;
        Ok(())
    }

    async fn add_ticket_resource(
        &self,
        ticket_id: TicketId,
        member_name: &str,
    ) -> Result<(), PsaError> {
        let body = json!([{ "op": "add", "path": "/resources", "value": member_name }]);

        let request = self
            .client
            .patch(self.url(&format!("/service/tickets/{ticket_id}")))
            .json(&body)
            .timeout(WRITE_TIMEOUT);
        let response = send(request).await?;
        expect_status(response, &[StatusCode::OK, StatusCode::CREATED]).await?;
        Ok(())
    }
}
