use axum::body::Bytes;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ImportWorkstations {
    /// CSV text, header row first.
    pub body: Bytes,
    pub requested_at: DateTime<Utc>,
}
