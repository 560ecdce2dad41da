use serde_json::Value as Json;

use crate::modules::upgrades::core::workstation::Workstation;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("field '{0}' cannot be edited")]
    UnknownField(String),
}

/// Inline-editable workstation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Status,
    Technician,
    Notes,
    UpdatedInAutomate,
}

impl EditableField {
    pub fn parse(name: &str) -> Result<Self, DecideError> {
        match name {
            "status" => Ok(Self::Status),
            "technician" => Ok(Self::Technician),
            "notes" => Ok(Self::Notes),
            "updated_in_automate" => Ok(Self::UpdatedInAutomate),
            other => Err(DecideError::UnknownField(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Technician => "technician",
            Self::Notes => "notes",
            Self::UpdatedInAutomate => "updated_in_automate",
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        workstation: Workstation,
        field: EditableField,
        /// Value as viewers should see it.
        value: Json,
    },
    Rejected {
        reason: DecideError,
    },
}
