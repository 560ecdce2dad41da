// Identifiers shared across the upgrades context and its adapters.
//
// Local records use sequential integers; remote PSA records carry the
// integer ids the PSA hands out.

pub type ClientId = i64;
pub type WorkstationId = i64;

pub type CompanyId = i64;
pub type MemberId = i64;
pub type TicketId = i64;
