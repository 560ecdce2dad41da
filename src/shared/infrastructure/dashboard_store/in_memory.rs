use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::modules::upgrades::core::workstation::{Client, NewWorkstation, Workstation};
use crate::shared::core::primitives::{ClientId, WorkstationId};
use crate::shared::infrastructure::dashboard_store::{
    DashboardStore, SnapshotRow, SnapshotSummary, StoreError,
};

#[derive(Default)]
struct Tables {
    clients: BTreeMap<ClientId, Client>,
    workstations: BTreeMap<WorkstationId, Workstation>,
    next_client_id: ClientId,
    next_workstation_id: WorkstationId,
}

impl Tables {
    fn allocate_client_id(&mut self) -> ClientId {
        self.next_client_id += 1;
        self.next_client_id
    }

    fn allocate_workstation_id(&mut self) -> WorkstationId {
        self.next_workstation_id += 1;
        self.next_workstation_id
    }
}

#[derive(Default)]
pub struct InMemoryDashboardStore {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemoryDashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert_client(&self, name: impl Into<String>) -> Result<Client, StoreError> {
        self.ensure_online()?;
        let name = name.into();
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables.clients.values().find(|client| client.name == name) {
            return Ok(existing.clone());
        }
        let client = Client {
            id: tables.allocate_client_id(),
            name,
        };
        tables.clients.insert(client.id, client.clone());
        Ok(client)
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Dashboard store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DashboardStore for InMemoryDashboardStore {
    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        self.ensure_online()?;
        let mut clients: Vec<Client> = self.tables.read().await.clients.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }

    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.clients.get(&id).cloned())
    }

    async fn list_workstations(&self) -> Result<Vec<Workstation>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.workstations.values().cloned().collect())
    }

    async fn workstations_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Workstation>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .workstations
            .values()
            .filter(|workstation| workstation.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn get_workstation(&self, id: WorkstationId) -> Result<Option<Workstation>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.workstations.get(&id).cloned())
    }

    async fn insert_workstation(&self, new: NewWorkstation) -> Result<Workstation, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if !tables.clients.contains_key(&new.client_id) {
            return Err(StoreError::Backend(format!(
                "client {} does not exist",
                new.client_id
            )));
        }
        let workstation = Workstation {
            id: tables.allocate_workstation_id(),
            client_id: new.client_id,
            computer_name: new.computer_name,
            ram_gb: new.ram_gb,
            processor_name: new.processor_name,
            diskspace_remaining_gb: new.diskspace_remaining_gb,
            status: new.status,
            technician: new.technician,
            notes: new.notes,
            updated_in_automate: new.updated_in_automate,
            completed_at: new.completed_at,
        };
        tables.workstations.insert(workstation.id, workstation.clone());
        Ok(workstation)
    }

    async fn save_workstation(&self, workstation: Workstation) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        match tables.workstations.get_mut(&workstation.id) {
            Some(stored) => {
                *stored = workstation;
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "workstation {} does not exist",
                workstation.id
            ))),
        }
    }

    async fn delete_workstation(&self, id: WorkstationId) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.write().await.workstations.remove(&id).is_some())
    }

    async fn replace_snapshot(&self, rows: Vec<SnapshotRow>) -> Result<SnapshotSummary, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;

        // Build the replacement aside and swap it in as the single commit point.
        let mut next = Tables {
            next_client_id: tables.next_client_id,
            next_workstation_id: tables.next_workstation_id,
            ..Tables::default()
        };
        for row in rows {
            let existing = next
                .clients
                .values()
                .find(|c| c.name == row.client_name)
                .map(|c| c.id);
            let client_id = match existing {
                Some(id) => id,
                None => {
                    let id = next.allocate_client_id();
                    next.clients.insert(
                        id,
                        Client {
                            id,
                            name: row.client_name,
                        },
                    );
                    id
                }
            };
            let id = next.allocate_workstation_id();
            next.workstations.insert(
                id,
                Workstation {
                    id,
                    client_id,
                    computer_name: row.computer_name,
                    ram_gb: row.ram_gb,
                    processor_name: row.processor_name,
                    diskspace_remaining_gb: row.diskspace_remaining_gb,
                    status: row.status,
                    technician: row.technician,
                    notes: row.notes,
                    updated_in_automate: row.updated_in_automate,
                    completed_at: row.completed_at,
                },
            );
        }

        let summary = SnapshotSummary {
            clients: next.clients.len(),
            workstations: next.workstations.len(),
        };
        *tables = next;
        Ok(summary)
    }
}
