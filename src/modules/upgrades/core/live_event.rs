use serde::Serialize;
use serde_json::Value as Json;

use crate::modules::upgrades::core::stats::DashboardStats;
use crate::shared::core::primitives::WorkstationId;

/// Server to viewer push messages, discriminated by `action`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LiveEvent {
    /// Bulk change; viewers re-fetch the dashboard.
    Refresh,
    FieldUpdate {
        id: WorkstationId,
        field: String,
        value: Json,
        stats: DashboardStats,
    },
}

#[cfg(test)]
mod live_event_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_serialize_refresh_as_a_bare_action() {
        let payload = serde_json::to_value(LiveEvent::Refresh).unwrap();
        assert_eq!(payload, json!({ "action": "refresh" }));
    }

    #[rstest]
    fn it_should_serialize_field_updates_with_stats() {
        let event = LiveEvent::FieldUpdate {
            id: 7,
            field: "status".into(),
            value: json!("Completed"),
            stats: DashboardStats {
                total: 2,
                completed: 1,
                ..DashboardStats::default()
            },
        };

        let payload = serde_json::to_value(event).unwrap();

        assert_eq!(payload["action"], "field_update");
        assert_eq!(payload["id"], 7);
        assert_eq!(payload["field"], "status");
        assert_eq!(payload["value"], "Completed");
        assert_eq!(payload["stats"]["total"], 2);
        assert_eq!(payload["stats"]["completed"], 1);
        assert_eq!(payload["stats"]["completed_synced"], 0);
    }
}
