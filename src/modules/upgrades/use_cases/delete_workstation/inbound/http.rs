use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::upgrades::use_cases::application_error::Ack;
use crate::modules::upgrades::use_cases::delete_workstation::command::DeleteWorkstation;
use crate::shared::core::primitives::WorkstationId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(workstation_id): Path<WorkstationId>,
) -> impl IntoResponse {
    match state
        .delete_workstation_handler
        .handle(DeleteWorkstation { workstation_id })
        .await
    {
        Ok(()) => Json(Ack::ok()).into_response(),
        Err(err) => err.into_response(),
    }
}
