use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::upgrades::core::filters::WorkstationFilter;
use crate::modules::upgrades::core::stats::DashboardStats;
use crate::modules::upgrades::core::workstation::Workstation;
use crate::modules::upgrades::use_cases::list_dashboard::projection::ClientSection;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWorkstation {
    pub id: i64,
    pub computer_name: String,
    pub ram_gb: String,
    pub processor_name: String,
    pub diskspace_remaining_gb: String,
    pub status: String,
    pub technician: String,
    pub notes: String,
    pub updated_in_automate: bool,
    pub completed_at: Option<String>,
}

impl From<Workstation> for GqlWorkstation {
    fn from(w: Workstation) -> Self {
        Self {
            id: w.id,
            computer_name: w.computer_name,
            ram_gb: w.ram_gb,
            processor_name: w.processor_name,
            diskspace_remaining_gb: w.diskspace_remaining_gb,
            status: w.status,
            technician: w.technician,
            notes: w.notes,
            updated_in_automate: w.updated_in_automate,
            completed_at: w.completed_at.map(|at| at.to_rfc3339()),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlClient {
    pub id: i64,
    pub name: String,
    pub ready: bool,
    pub workstations: Vec<GqlWorkstation>,
}

impl From<ClientSection> for GqlClient {
    fn from(c: ClientSection) -> Self {
        Self {
            id: c.id,
            name: c.name,
            ready: c.ready,
            workstations: c.workstations.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct GqlStats {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub ready_to_upgrade: u64,
    pub not_started: u64,
    pub completed_synced: u64,
}

impl From<DashboardStats> for GqlStats {
    fn from(s: DashboardStats) -> Self {
        Self {
            total: s.total as u64,
            completed: s.completed as u64,
            in_progress: s.in_progress as u64,
            ready_to_upgrade: s.ready_to_upgrade as u64,
            not_started: s.not_started as u64,
            completed_synced: s.completed_synced as u64,
        }
    }
}

#[derive(InputObject, Default)]
pub struct GqlFilter {
    pub client: Option<String>,
    pub ram: Option<String>,
    pub technician: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl From<GqlFilter> for WorkstationFilter {
    fn from(f: GqlFilter) -> Self {
        Self {
            client: f.client.unwrap_or_default(),
            ram: f.ram.unwrap_or_default(),
            technician: f.technician.unwrap_or_default(),
            status: f.status.unwrap_or_default(),
            search: f.search.unwrap_or_default(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn clients(
        &self,
        context: &Context<'_>,
        filter: Option<GqlFilter>,
    ) -> GqlResult<Vec<GqlClient>> {
        let state = context.data_unchecked::<AppState>();
        let filter = WorkstationFilter::from(filter.unwrap_or_default());
        let view = state
            .dashboard_handler
            .handle(&filter)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.clients.into_iter().map(Into::into).collect())
    }

    async fn stats(&self, context: &Context<'_>) -> GqlResult<GqlStats> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .dashboard_handler
            .handle(&WorkstationFilter::default())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.stats.into())
    }
}
