use serde::Deserialize;

use crate::modules::upgrades::core::workstation::Workstation;

/// How the column filters compare. `search` is always a case-insensitive
/// substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Contains,
}

/// Dashboard and export filters; blank fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkstationFilter {
    pub client: String,
    pub ram: String,
    pub technician: String,
    pub status: String,
    pub search: String,
}

impl WorkstationFilter {
    pub fn matches(&self, client_name: &str, workstation: &Workstation, mode: MatchMode) -> bool {
        let column = |wanted: &str, actual: &str| match (wanted.trim(), mode) {
            ("", _) => true,
            (wanted, MatchMode::Exact) => actual == wanted,
            (wanted, MatchMode::Contains) => contains_ignore_case(actual, wanted),
        };

        column(&self.client, client_name)
            && column(&self.ram, &workstation.ram_gb)
            && column(&self.technician, &workstation.technician)
            && column(&self.status, &workstation.status)
            && self.matches_search(client_name, workstation)
    }

    fn matches_search(&self, client_name: &str, workstation: &Workstation) -> bool {
        let needle = self.search.trim();
        needle.is_empty()
            || [
                workstation.computer_name.as_str(),
                workstation.processor_name.as_str(),
                workstation.diskspace_remaining_gb.as_str(),
                workstation.notes.as_str(),
                client_name,
            ]
            .iter()
            .any(|haystack| contains_ignore_case(haystack, needle))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
