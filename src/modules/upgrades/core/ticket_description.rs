// Text of the project ticket raised for a client's upgrade batch.

use std::collections::BTreeSet;

use crate::modules::upgrades::core::workstation::WorkstationView;

pub const TICKET_SUMMARY: &str = "[PROJECT] Windows 11 Upgrades";
pub const UNASSIGNED: &str = "Unassigned";

/// Multi-line description grouped by technician, in the order technicians are
/// first encountered.
pub fn build_description(workstations: &[WorkstationView<'_>]) -> String {
    let mut groups: Vec<(&str, Vec<&WorkstationView<'_>>)> = Vec::new();
    for workstation in workstations {
        let technician = match workstation.technician.trim() {
            "" => UNASSIGNED,
            name => name,
        };
        match groups.iter_mut().find(|(name, _)| *name == technician) {
            Some((_, members)) => members.push(workstation),
            None => groups.push((technician, vec![workstation])),
        }
    }

    let mut lines = vec![
        "Windows 11 Upgrade Project Details:".to_string(),
        String::new(),
        "Workstations to be upgraded:".to_string(),
    ];
    for (technician, members) in groups {
        lines.push(String::new());
        lines.push(format!("Assigned to {technician}:"));
        for workstation in members {
            lines.push(format!(
                "  • {} - {}, {}GB RAM, {}GB free disk - Status: {}",
                workstation.computer_name,
                workstation.processor_name,
                workstation.ram_gb,
                workstation.diskspace_remaining_gb,
                workstation.status,
            ));
            if !workstation.notes.trim().is_empty() {
                lines.push(format!("    Notes: {}", workstation.notes));
            }
        }
    }
    lines.join("\n")
}

/// Non-blank technician names referenced by the batch, deduplicated.
pub fn distinct_technicians(workstations: &[WorkstationView<'_>]) -> BTreeSet<String> {
    workstations
        .iter()
        .map(|workstation| workstation.technician.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
