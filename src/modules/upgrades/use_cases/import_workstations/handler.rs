use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::upgrades::core::live_event::LiveEvent;
use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::modules::upgrades::use_cases::import_workstations::command::ImportWorkstations;
use crate::modules::upgrades::use_cases::import_workstations::parse::parse_snapshot;
use crate::shared::infrastructure::dashboard_store::{DashboardStore, SnapshotSummary};
use crate::shared::infrastructure::live_sessions::SessionRegistry;

/// Replaces the whole dashboard with the contents of an uploaded file.
pub struct ImportWorkstationsHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    store: Arc<TStore>,
    sessions: Arc<SessionRegistry>,
}

impl<TStore> ImportWorkstationsHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    pub fn new(store: Arc<TStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(
        &self,
        command: ImportWorkstations,
    ) -> Result<SnapshotSummary, ApplicationError> {
        let rows = parse_snapshot(&command.body, command.requested_at).map_err(|err| {
            warn!(error = %err, "import rejected");
            ApplicationError::Validation(err.to_string())
        })?;

        let summary = self.store.replace_snapshot(rows).await?;
        info!(
            clients = summary.clients,
            workstations = summary.workstations,
            "dashboard replaced from import"
        );
        self.sessions.broadcast(&LiveEvent::Refresh).await;
        Ok(summary)
    }
}

#[cfg(test)]
mod import_workstations_handler_tests {
    use super::*;
    use crate::shared::infrastructure::dashboard_store::in_memory::InMemoryDashboardStore;
    use crate::shared::infrastructure::live_sessions::channel::ChannelSink;
    use crate::tests::fixtures::workstation::NewWorkstationBuilder;
    use axum::body::Bytes;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use tokio::sync::mpsc::Receiver;

    const VALID: &str = "Client Name,Computer Name,RAM_GB,Processor Name,DiskSpaceRemaining_GB,Status,Technician,Notes\n\
Fabrikam,FAB-01,16,i5,100,Ready to Upgrade,Brian,\n\
Fabrikam,FAB-02,8,i3,20,Needs RAM Upgrade,Ed,order RAM\n\
Northwind,NW-01,16,i7,300,,,\n";

    type BeforeEachReturn = (
        Arc<InMemoryDashboardStore>,
        Arc<SessionRegistry>,
        Receiver<String>,
    );

    #[fixture]
    async fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryDashboardStore::new());
        let client = store.insert_client("Old Client").await.unwrap();
        store
            .insert_workstation(NewWorkstationBuilder::new(client.id).build())
            .await
            .unwrap();
        let sessions = Arc::new(SessionRegistry::new());
        let (sink, receiver) = ChannelSink::channel();
        sessions.register(Arc::new(sink)).await;
        (store, sessions, receiver)
    }

    fn command(body: &'static str) -> ImportWorkstations {
        ImportWorkstations {
            body: Bytes::from_static(body.as_bytes()),
            requested_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_the_dashboard_and_broadcast_refresh(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (store, sessions, mut receiver) = before_each.await;
        let handler = ImportWorkstationsHandler::new(store.clone(), sessions);

        let summary = handler.handle(command(VALID)).await.unwrap();

        assert_eq!(
            summary,
            SnapshotSummary {
                clients: 2,
                workstations: 3
            }
        );
        let names: Vec<String> = store
            .list_clients()
            .await
            .unwrap()
            .into_iter()
            .map(|client| client.name)
            .collect();
        assert_eq!(names, vec!["Fabrikam", "Northwind"]);
        assert_eq!(receiver.recv().await.unwrap(), r#"{"action":"refresh"}"#);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_the_dashboard_untouched_on_a_malformed_file(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (store, sessions, mut receiver) = before_each.await;
        let handler = ImportWorkstationsHandler::new(store.clone(), sessions);
        let ragged = "Client Name,Computer Name,RAM_GB,Processor Name,DiskSpaceRemaining_GB,Status,Technician,Notes\n\
Fabrikam,FAB-01,16,i5,100,Ready to Upgrade,Brian,\n\
Fabrikam,FAB-02\n";

        let result = handler.handle(command(ragged)).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "line 3: expected 8 fields, found 2"
        );
        let clients = store.list_clients().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Old Client");
        assert!(receiver.try_recv().is_err());
    }
}
