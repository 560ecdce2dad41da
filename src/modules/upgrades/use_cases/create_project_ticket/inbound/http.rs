use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::modules::upgrades::use_cases::create_project_ticket::command::CreateProjectTicket;
use crate::shared::core::primitives::{ClientId, TicketId};
use crate::shell::state::AppState;

/// Inline-renderable outcome; failures are reported here, not as HTTP errors.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTicketResponse {
    pub success: bool,
    pub message: String,
    /// Same text as `message`, set only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<TicketId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cw_company_name: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
) -> impl IntoResponse {
    let handler = state.ticket_handler.clone();
    // Remote calls run off the request task.
    let task = tokio::spawn(async move { handler.handle(CreateProjectTicket { client_id }).await });

    let response = match task.await {
        Ok(Ok(created)) => CreateTicketResponse {
            success: true,
            message: format!(
                "Ticket #{} created for {}",
                created.ticket_id, created.company.name
            ),
            error: None,
            ticket_id: Some(created.ticket_id),
            cw_company_name: Some(created.company.name),
            warnings: created.warnings,
        },
        Ok(Err(err)) => {
            warn!(client_id, error = %err, "project ticket not created");
            let message = err.to_string();
            CreateTicketResponse {
                success: false,
                error: Some(message.clone()),
                message,
                ticket_id: None,
                cw_company_name: None,
                warnings: Vec::new(),
            }
        }
        Err(join_err) => {
            error!(client_id, error = %join_err, "ticket creation task failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    Json(response).into_response()
}
