use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::modules::upgrades::core::filters::{MatchMode, WorkstationFilter};
use crate::modules::upgrades::core::readiness::is_ready;
use crate::modules::upgrades::core::stats::DashboardStats;
use crate::modules::upgrades::core::workstation::{STATUS_LIST, TECHNICIANS, Workstation};
use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::modules::upgrades::use_cases::list_dashboard::projection::{ClientSection, DashboardView};
use crate::shared::core::primitives::ClientId;
use crate::shared::infrastructure::dashboard_store::DashboardStore;

pub struct DashboardQueryHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DashboardQueryHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, filter: &WorkstationFilter) -> Result<DashboardView, ApplicationError> {
        let clients = self.store.list_clients().await?;
        let workstations = self.store.list_workstations().await?;

        let mut by_client: HashMap<ClientId, Vec<&Workstation>> = HashMap::new();
        for workstation in &workstations {
            by_client
                .entry(workstation.client_id)
                .or_default()
                .push(workstation);
        }

        let mut sections = Vec::new();
        for client in &clients {
            let batch = by_client.remove(&client.id).unwrap_or_default();
            let matching: Vec<Workstation> = batch
                .iter()
                .filter(|workstation| filter.matches(&client.name, workstation, MatchMode::Exact))
                .map(|workstation| (*workstation).clone())
                .collect();
            if matching.is_empty() {
                continue;
            }
            let views: Vec<_> = batch.iter().map(|workstation| workstation.view()).collect();
            sections.push(ClientSection {
                id: client.id,
                name: client.name.clone(),
                ready: is_ready(&views),
                workstations: matching,
            });
        }

        let all_ram: BTreeSet<String> = workstations
            .iter()
            .filter(|workstation| !workstation.ram_gb.is_empty())
            .map(|workstation| workstation.ram_gb.clone())
            .collect();

        Ok(DashboardView {
            clients: sections,
            stats: DashboardStats::compute(&workstations),
            statuses: STATUS_LIST.iter().map(|s| s.to_string()).collect(),
            technicians: TECHNICIANS.iter().map(|s| s.to_string()).collect(),
            all_clients: clients.into_iter().map(|client| client.name).collect(),
            all_ram: all_ram.into_iter().collect(),
        })
    }
}
