// Registry of connected dashboard viewers and best-effort fan-out to them.
//
// The registry is owned by the process and handed to every handler that needs
// to broadcast. A session whose delivery fails is dropped from the registry
// and never tried again; other sessions and the triggering operation are
// unaffected.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("session closed")]
    Closed,

    #[error("session is not keeping up")]
    Lagging,
}

/// Outbound half of one viewer connection.
#[async_trait]
pub trait SessionSink: Send + Sync {
    async fn deliver(&self, payload: &str) -> Result<(), DeliveryError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub dropped: usize,
}

#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Arc<dyn SessionSink>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, sink: Arc<dyn SessionSink>) -> SessionId {
        let id = Uuid::now_v7();
        self.sessions.write().await.insert(id, sink);
        debug!(session = %id, "live session registered");
        id
    }

    pub async fn unregister(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            debug!(session = %id, "live session unregistered");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Sends `event` as JSON to every session registered when the call starts.
    /// The session map is not locked while deliveries are awaited.
    pub async fn broadcast<T: Serialize + ?Sized>(&self, event: &T) -> BroadcastReport {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "live event could not be serialized; nothing sent");
                return BroadcastReport::default();
            }
        };

        let targets: Vec<(SessionId, Arc<dyn SessionSink>)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, sink)| (*id, Arc::clone(sink)))
            .collect();

        let mut report = BroadcastReport::default();
        let mut failed = Vec::new();
        for (id, sink) in targets {
            match sink.deliver(&payload).await {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    warn!(session = %id, error = %err, "dropping live session after failed delivery");
                    failed.push(id);
                }
            }
        }

        if !failed.is_empty() {
            let mut sessions = self.sessions.write().await;
            for id in &failed {
                sessions.remove(id);
            }
            report.dropped = failed.len();
        }
        report
    }
}

pub mod channel;
