use crate::shared::core::primitives::ClientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateProjectTicket {
    pub client_id: ClientId,
}
