use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::upgrades::core::filters::WorkstationFilter;
use crate::modules::upgrades::use_cases::application_error::Ack;
use crate::modules::upgrades::use_cases::export_workstations::handler::ExportFormat;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportParams {
    #[serde(flatten)]
    pub filter: WorkstationFilter,
    #[serde(default)]
    pub export_type: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> impl IntoResponse {
    let Some(format) = ExportFormat::parse(&params.export_type) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(Ack::failed(format!(
                "unsupported export type '{}'",
                params.export_type
            ))),
        )
            .into_response();
    };

    match state.export_handler.handle(&params.filter, format).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, format.content_type().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename={}", format.file_name()),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod export_workstations_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{make_test_state, seed_workstation};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/export", get(handle)).with_state(state)
    }

    #[tokio::test]
    async fn it_should_download_a_csv_attachment() {
        let state = make_test_state();
        seed_workstation(&state, "Contoso", "CON-01").await;
        seed_workstation(&state, "Litware", "LIT-01").await;

        let response = app(state)
            .oneshot(
                Request::get("/export?client=lit&export_type=csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=export.csv"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("LIT-01"));
    }

    #[tokio::test]
    async fn it_should_download_an_xlsx_attachment() {
        let state = make_test_state();
        seed_workstation(&state, "Contoso", "CON-01").await;

        let response = app(state)
            .oneshot(
                Request::get("/export?export_type=xlsx")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=export.xlsx"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unknown_export_type() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/export?export_type=pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
