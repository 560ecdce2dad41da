use std::sync::Arc;

use crate::modules::upgrades::adapters::outbound::psa::PsaApi;
use crate::modules::upgrades::adapters::outbound::psa_in_memory::InMemoryPsa;
use crate::modules::upgrades::adapters::outbound::ticketing_client::TicketSettings;
use crate::modules::upgrades::core::workstation::Workstation;
use crate::shared::infrastructure::dashboard_store::DashboardStore;
use crate::shared::infrastructure::dashboard_store::in_memory::InMemoryDashboardStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::workstation::NewWorkstationBuilder;

pub fn make_test_state() -> AppState {
    make_state_with_psa(InMemoryPsa::new()).0
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryDashboardStore::new();
    store.toggle_offline();
    AppState::new(
        Arc::new(store),
        Arc::new(InMemoryPsa::new()),
        TicketSettings::default(),
    )
}

pub fn make_state_with_psa(psa: InMemoryPsa) -> (AppState, Arc<InMemoryPsa>) {
    let psa = Arc::new(psa);
    let state = AppState::new(
        Arc::new(InMemoryDashboardStore::new()),
        psa.clone() as Arc<dyn PsaApi>,
        TicketSettings::default(),
    );
    (state, psa)
}

pub async fn seed_workstation(
    state: &AppState,
    client_name: &str,
    computer_name: &str,
) -> Workstation {
    let client = state.store.insert_client(client_name).await.unwrap();
    state
        .store
        .insert_workstation(
            NewWorkstationBuilder::new(client.id)
                .computer_name(computer_name)
                .build(),
        )
        .await
        .unwrap()
}
