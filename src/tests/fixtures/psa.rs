use crate::modules::upgrades::adapters::outbound::psa_in_memory::InMemoryPsa;
use crate::shared::core::primitives::{CompanyId, MemberId};

pub const ACME_ID: CompanyId = 250;
pub const GLOBEX_ID: CompanyId = 251;
pub const BRIAN_ID: MemberId = 11;
pub const ED_ID: MemberId = 12;

/// Directory with two companies and two technicians. Brian is reachable by
/// his `brian.smith` identifier only if asked by full name; Ed only by first
/// name.
pub fn seeded_psa() -> InMemoryPsa {
    InMemoryPsa::new()
        .with_company(ACME_ID, "Acme Corp")
        .with_company(GLOBEX_ID, "Globex")
        .with_member(BRIAN_ID, "Brian", "Smith")
        .with_member(ED_ID, "Ed", "Jones")
}
