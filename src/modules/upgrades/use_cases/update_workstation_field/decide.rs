use serde_json::Value as Json;

use crate::modules::upgrades::core::workstation::{Workstation, parse_flag};
use crate::modules::upgrades::use_cases::update_workstation_field::command::UpdateWorkstationField;
use crate::modules::upgrades::use_cases::update_workstation_field::decision::{
    Decision, EditableField,
};

pub fn decide_update(current: &Workstation, command: UpdateWorkstationField) -> Decision {
    let field = match EditableField::parse(&command.field) {
        Ok(field) => field,
        Err(reason) => return Decision::Rejected { reason },
    };

    let mut workstation = current.clone();
    let value = match field {
        EditableField::Status => {
            workstation.set_status(&command.value, command.requested_at);
            Json::String(workstation.status.clone())
        }
        EditableField::Technician => {
            workstation.technician = command.value.clone();
            Json::String(command.value)
        }
        EditableField::Notes => {
            workstation.notes = command.value.clone();
            Json::String(command.value)
        }
        EditableField::UpdatedInAutomate => {
            let flag = parse_flag(&command.value);
            workstation.updated_in_automate = flag;
            Json::Bool(flag)
        }
    };

    Decision::Accepted {
        workstation,
        field,
        value,
    }
}
