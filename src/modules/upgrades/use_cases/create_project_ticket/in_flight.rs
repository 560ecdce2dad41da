use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::shared::core::primitives::ClientId;

/// Clients with a ticket creation currently running.
#[derive(Debug, Default)]
pub struct InFlightClients {
    clients: Mutex<HashSet<ClientId>>,
}

/// Marks a client busy until dropped.
#[derive(Debug)]
pub struct InFlightToken {
    owner: Arc<InFlightClients>,
    client_id: ClientId,
}

impl InFlightClients {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the client is already busy.
    pub fn try_acquire(self: &Arc<Self>, client_id: ClientId) -> Option<InFlightToken> {
        let inserted = self
            .clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(client_id);
        inserted.then(|| InFlightToken {
            owner: Arc::clone(self),
            client_id,
        })
    }

    pub fn is_busy(&self, client_id: ClientId) -> bool {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&client_id)
    }
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.owner
            .clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.client_id);
    }
}
