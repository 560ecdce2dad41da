use std::sync::Arc;

use axum::body::Bytes;
use chrono::Utc;

use crate::modules::upgrades::adapters::outbound::psa_in_memory::PsaCall;
use crate::modules::upgrades::core::filters::WorkstationFilter;
use crate::modules::upgrades::use_cases::create_project_ticket::command::CreateProjectTicket;
use crate::modules::upgrades::use_cases::import_workstations::command::ImportWorkstations;
use crate::shared::infrastructure::live_sessions::channel::ChannelSink;
use crate::tests::fixtures::app::make_state_with_psa;
use crate::tests::fixtures::psa::{ACME_ID, BRIAN_ID, ED_ID, seeded_psa};

const SNAPSHOT: &str = "\
Client Name,Computer Name,RAM_GB,Processor Name,DiskSpaceRemaining_GB,Status,Technician,Notes,Updated in Automate,Completed Date
Acme Corp,ACME-01,16,Intel Core i7-8700,212,Completed,Brian Smith,,Yes,2026-10-01 09:30
Acme Corp,ACME-02,8,Intel Core i5-8500,96,In Progress,Ed Jones,needs BIOS update,No,
";

#[tokio::test]
async fn imports_a_ready_client_and_hands_it_off_as_a_ticket() {
    let (state, psa) = make_state_with_psa(seeded_psa());
    let (sink, mut viewer) = ChannelSink::channel();
    state.sessions.register(Arc::new(sink)).await;

    let summary = state
        .import_handler
        .handle(ImportWorkstations {
            body: Bytes::from_static(SNAPSHOT.as_bytes()),
            requested_at: Utc::now(),
        })
        .await
        .unwrap();
    assert_eq!(summary.clients, 1);
    assert_eq!(summary.workstations, 2);
    assert_eq!(viewer.recv().await.unwrap(), r#"{"action":"refresh"}"#);

    let dashboard = state
        .dashboard_handler
        .handle(&WorkstationFilter::default())
        .await
        .unwrap();
    let section = &dashboard.clients[0];
    assert_eq!(section.name, "Acme Corp");
    assert!(section.ready);

    let created = state
        .ticket_handler
        .handle(CreateProjectTicket {
            client_id: section.id,
        })
        .await
        .unwrap();

    assert_eq!(created.company.id, ACME_ID);
    assert!(created.warnings.is_empty());
    assert_eq!(psa.calls(PsaCall::CompaniesByName).await, 1);
    assert_eq!(psa.calls(PsaCall::AllCompanies).await, 0);
    assert_eq!(psa.calls(PsaCall::CreateTicket).await, 1);
    assert_eq!(psa.calls(PsaCall::MembersByIdentifier).await, 2);
    assert_eq!(psa.calls(PsaCall::AddScheduleEntry).await, 2);
    assert_eq!(psa.calls(PsaCall::AddTicketResource).await, 0);

    let tickets = psa.tickets().await;
    assert_eq!(tickets.len(), 1);
    let (ticket_id, ticket) = &tickets[0];
    assert_eq!(*ticket_id, created.ticket_id);
    assert_eq!(ticket.company_id, ACME_ID);
    assert_eq!(ticket.resources, vec!["Brian Smith", "Ed Jones"]);
    assert!(ticket.description.contains("ACME-02"));

    let mut members: Vec<_> = psa
        .schedule_entries()
        .await
        .into_iter()
        .map(|entry| (entry.ticket_id, entry.member_id))
        .collect();
    members.sort();
    assert_eq!(members, vec![(created.ticket_id, BRIAN_ID), (created.ticket_id, ED_ID)]);
}
