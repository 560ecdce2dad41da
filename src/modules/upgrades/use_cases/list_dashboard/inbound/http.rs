use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::upgrades::core::filters::WorkstationFilter;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(filter): Query<WorkstationFilter>,
) -> impl IntoResponse {
    match state.dashboard_handler.handle(&filter).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}
