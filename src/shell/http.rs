use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::upgrades::use_cases::add_workstation::inbound::http as add_http;
use crate::modules::upgrades::use_cases::create_project_ticket::inbound::http as ticket_http;
use crate::modules::upgrades::use_cases::delete_workstation::inbound::http as delete_http;
use crate::modules::upgrades::use_cases::edit_workstation::inbound::http as edit_http;
use crate::modules::upgrades::use_cases::export_workstations::inbound::http as export_http;
use crate::modules::upgrades::use_cases::import_workstations::inbound::http as import_http;
use crate::modules::upgrades::use_cases::list_dashboard::inbound::http as dashboard_http;
use crate::modules::upgrades::use_cases::live_updates::inbound::ws as live_ws;
use crate::modules::upgrades::use_cases::update_workstation_field::inbound::http as update_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/dashboard", get(dashboard_http::handle))
        .route("/export", get(export_http::handle))
        .route("/update", post(update_http::handle))
        .route("/import", post(import_http::handle))
        .route("/workstations/add", post(add_http::handle))
        .route("/workstations/{id}/edit", post(edit_http::handle))
        .route("/workstations/{id}/delete", post(delete_http::handle))
        .route(
            "/create-project-ticket/{client_id}",
            post(ticket_http::handle),
        )
        .route("/ws", get(live_ws::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::tests::fixtures::app::make_test_state;

    use super::router;

    #[tokio::test]
    async fn it_should_serve_graphiql_and_graphql() {
        let app = router(make_test_state());

        let page = app
            .clone()
            .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let query = app
            .oneshot(
                Request::post("/gql")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query":"{ stats { total } }"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(page.status(), StatusCode::OK);
        assert_eq!(query.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn it_should_not_route_unknown_paths() {
        let response = router(make_test_state())
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
