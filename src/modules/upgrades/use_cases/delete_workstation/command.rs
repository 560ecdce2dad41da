use crate::shared::core::primitives::WorkstationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteWorkstation {
    pub workstation_id: WorkstationId,
}
