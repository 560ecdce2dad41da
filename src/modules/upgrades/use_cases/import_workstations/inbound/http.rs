use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::modules::upgrades::use_cases::import_workstations::command::ImportWorkstations;
use crate::shell::state::AppState;

/// Form field carrying the file in a multipart upload.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportResponse {
    pub ok: bool,
    pub clients: usize,
    pub workstations: usize,
}

/// Accepts either a browser form upload or the raw CSV as the request body.
pub async fn handle(State(state): State<AppState>, request: Request) -> Response {
    let body = match read_upload(request, &state).await {
        Ok(body) => body,
        Err(err) => return err.into_response(),
    };
    let command = ImportWorkstations {
        body,
        requested_at: Utc::now(),
    };

    match state.import_handler.handle(command).await {
        Ok(summary) => Json(ImportResponse {
            ok: true,
            clients: summary.clients,
            workstations: summary.workstations,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

async fn read_upload(request: Request, state: &AppState) -> Result<Bytes, ApplicationError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));
    if !is_multipart {
        return Bytes::from_request(request, state)
            .await
            .map_err(|rejection| ApplicationError::Validation(rejection.body_text()));
    }

    let mut multipart = Multipart::from_request(request, state)
        .await
        .map_err(|rejection| ApplicationError::Validation(rejection.body_text()))?;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApplicationError::Validation(err.body_text()))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|err| ApplicationError::Validation(err.body_text()));
        }
    }
    Err(ApplicationError::Validation(format!(
        "no '{UPLOAD_FIELD}' field in upload"
    )))
}
