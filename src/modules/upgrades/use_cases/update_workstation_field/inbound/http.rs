use axum::{Form, Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::upgrades::use_cases::application_error::Ack;
use crate::modules::upgrades::use_cases::update_workstation_field::command::UpdateWorkstationField;
use crate::shell::state::AppState;
use crate::shared::core::primitives::WorkstationId;

#[derive(Deserialize)]
pub struct UpdateFieldForm {
    pub id: WorkstationId,
    pub field: String,
    pub value: String,
}

pub async fn handle(State(state): State<AppState>, Form(form): Form<UpdateFieldForm>) -> impl IntoResponse {
    let command = UpdateWorkstationField {
        workstation_id: form.id,
        field: form.field,
        value: form.value,
        requested_at: Utc::now(),
    };

    match state.update_field_handler.handle(command).await {
        Ok(()) => Json(Ack::ok()).into_response(),
        Err(err) => err.into_response(),
    }
}
