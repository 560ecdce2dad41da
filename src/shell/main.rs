use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use upgrade_tracker::modules::upgrades::adapters::outbound::psa::PsaApi;
use upgrade_tracker::modules::upgrades::adapters::outbound::psa_connectwise::ConnectWiseClient;
use upgrade_tracker::modules::upgrades::adapters::outbound::psa_in_memory::InMemoryPsa;
use upgrade_tracker::shared::infrastructure::dashboard_store::in_memory::InMemoryDashboardStore;
use upgrade_tracker::shell::config::Settings;
use upgrade_tracker::shell::http::router;
use upgrade_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings = Settings::from_env()?;

    let psa: Arc<dyn PsaApi> = match &settings.connectwise {
        Some(connectwise) => {
            info!(base_url = %connectwise.base_url, "using ConnectWise PSA");
            Arc::new(ConnectWiseClient::new(connectwise)?)
        }
        None => {
            warn!("no ConnectWise credentials configured; tickets go to an in-memory PSA");
            Arc::new(InMemoryPsa::new())
        }
    };

    let state = AppState::new(
        Arc::new(InMemoryDashboardStore::new()),
        psa,
        settings.tickets.clone(),
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!("Dashboard API: http://{}/dashboard", settings.bind_addr);
    info!("GraphQL endpoint: http://{}/gql", settings.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
