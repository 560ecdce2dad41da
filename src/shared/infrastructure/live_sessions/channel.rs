use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::shared::infrastructure::live_sessions::{DeliveryError, SessionSink};

/// Per-connection outbound buffer depth.
pub const SESSION_BUFFER: usize = 64;

/// Session sink backed by a bounded channel drained by the connection task.
/// A full buffer counts as a failed delivery so one slow viewer cannot hold
/// up the fan-out.
pub struct ChannelSink {
    sender: mpsc::Sender<String>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(SESSION_BUFFER);
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl SessionSink for ChannelSink {
    async fn deliver(&self, payload: &str) -> Result<(), DeliveryError> {
        self.sender
            .try_send(payload.to_string())
            .map_err(|err| match err {
                TrySendError::Full(_) => DeliveryError::Lagging,
                TrySendError::Closed(_) => DeliveryError::Closed,
            })
    }
}
