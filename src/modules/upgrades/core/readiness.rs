// Readiness gate for project-ticket creation.
//
// A client is ready once every one of its workstations has a technician and
// an actionable status. Pure over plain field snapshots.

use crate::modules::upgrades::core::workstation::{
    PLACEHOLDER_STATUS, STATUS_ASSIGNED, WorkstationView,
};

/// Statuses that mean work on the machine has not started yet.
pub const NOT_ACTIONABLE_STATUSES: [&str; 2] = [PLACEHOLDER_STATUS, STATUS_ASSIGNED];

pub fn is_actionable_status(status: &str) -> bool {
    let status = status.trim();
    !status.is_empty() && !NOT_ACTIONABLE_STATUSES.contains(&status)
}

pub fn is_workstation_ready(workstation: &WorkstationView<'_>) -> bool {
    !workstation.technician.trim().is_empty() && is_actionable_status(workstation.status)
}

pub fn is_ready(workstations: &[WorkstationView<'_>]) -> bool {
    !workstations.is_empty() && workstations.iter().all(is_workstation_ready)
}

#[cfg(test)]
mod readiness_tests {
    use super::*;
    use crate::modules::upgrades::core::workstation::{
        STATUS_COMPLETED, STATUS_IN_PROGRESS, Workstation,
    };
    use crate::tests::fixtures::workstation::WorkstationBuilder;
    use rstest::rstest;

    fn views(workstations: &[Workstation]) -> Vec<WorkstationView<'_>> {
        workstations.iter().map(Workstation::view).collect()
    }

    #[rstest]
    fn it_should_never_be_ready_without_workstations() {
        assert!(!is_ready(&[]));
    }

    #[rstest]
    fn it_should_be_ready_when_every_workstation_has_a_technician_and_a_started_status() {
        let workstations = vec![
            WorkstationBuilder::new()
                .status(STATUS_COMPLETED)
                .technician("Brian")
                .build(),
            WorkstationBuilder::new()
                .status(STATUS_IN_PROGRESS)
                .technician("Ed")
                .build(),
        ];
        assert!(is_ready(&views(&workstations)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn it_should_not_be_ready_when_a_technician_is_blank(#[case] technician: &str) {
        let workstations = vec![
            WorkstationBuilder::new()
                .status(STATUS_COMPLETED)
                .technician("Brian")
                .build(),
            WorkstationBuilder::new()
                .status(STATUS_COMPLETED)
                .technician(technician)
                .build(),
        ];
        assert!(!is_ready(&views(&workstations)));
    }

    #[rstest]
    #[case(PLACEHOLDER_STATUS)]
    #[case("Assigned")]
    #[case("")]
    fn it_should_not_be_ready_when_a_status_is_not_actionable(#[case] status: &str) {
        let workstations = vec![
            WorkstationBuilder::new()
                .status(STATUS_IN_PROGRESS)
                .technician("Roy")
                .build(),
            WorkstationBuilder::new()
                .status(status)
                .technician("Roy")
                .build(),
        ];
        assert!(!is_ready(&views(&workstations)));
    }

    #[rstest]
    #[case("Scheduled")]
    #[case("Needs RAM Upgrade")]
    #[case("Pending Upgrade")]
    fn it_should_accept_any_other_status(#[case] status: &str) {
        let workstations = vec![
            WorkstationBuilder::new()
                .status(status)
                .technician("Jessica")
                .build(),
        ];
        assert!(is_ready(&views(&workstations)));
    }
}
