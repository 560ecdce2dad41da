use axum::{
    Form, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::upgrades::use_cases::edit_workstation::command::EditWorkstation;
use crate::shared::core::primitives::WorkstationId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditWorkstationForm {
    pub computer_name: String,
    pub ram_gb: String,
    pub processor_name: String,
    pub diskspace_remaining_gb: String,
    pub status: String,
    pub technician: String,
    #[serde(default)]
    pub notes: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(workstation_id): Path<WorkstationId>,
    Form(form): Form<EditWorkstationForm>,
) -> impl IntoResponse {
    let command = EditWorkstation {
        workstation_id,
        computer_name: form.computer_name,
        ram_gb: form.ram_gb,
        processor_name: form.processor_name,
        diskspace_remaining_gb: form.diskspace_remaining_gb,
        status: form.status,
        technician: form.technician,
        notes: form.notes,
        requested_at: Utc::now(),
    };

    match state.edit_workstation_handler.handle(command).await {
        Ok(workstation) => Json(workstation).into_response(),
        Err(err) => err.into_response(),
    }
}
