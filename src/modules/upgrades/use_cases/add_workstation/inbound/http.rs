use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::upgrades::use_cases::add_workstation::command::AddWorkstation;
use crate::shared::core::primitives::ClientId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddWorkstationForm {
    pub client_id: ClientId,
    pub computer_name: String,
    pub ram_gb: String,
    pub processor_name: String,
    pub diskspace_remaining_gb: String,
    pub status: Option<String>,
    #[serde(default)]
    pub technician: String,
    #[serde(default)]
    pub notes: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Form(form): Form<AddWorkstationForm>,
) -> impl IntoResponse {
    let command = AddWorkstation {
        client_id: form.client_id,
        computer_name: form.computer_name,
        ram_gb: form.ram_gb,
        processor_name: form.processor_name,
        diskspace_remaining_gb: form.diskspace_remaining_gb,
        status: form.status,
        technician: form.technician,
        notes: form.notes,
        requested_at: Utc::now(),
    };

    match state.add_workstation_handler.handle(command).await {
        Ok(workstation) => (StatusCode::CREATED, Json(workstation)).into_response(),
        Err(err) => err.into_response(),
    }
}
