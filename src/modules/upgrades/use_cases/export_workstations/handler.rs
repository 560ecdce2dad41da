use std::collections::HashMap;
use std::sync::Arc;

use csv::Writer;
use rust_xlsxwriter::Workbook;

use crate::modules::upgrades::core::filters::{MatchMode, WorkstationFilter};
use crate::modules::upgrades::core::tabular::{COLUMNS, COMPLETED_DATE_FORMAT, format_flag};
use crate::modules::upgrades::use_cases::application_error::ApplicationError;
use crate::shared::infrastructure::dashboard_store::DashboardStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Csv => "export.csv",
            Self::Xlsx => "export.xlsx",
        }
    }
}

type ExportRow = [String; COLUMNS.len()];

pub struct ExportWorkstationsHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ExportWorkstationsHandler<TStore>
where
    TStore: DashboardStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Renders the matching workstations, ordered by client name then
    /// computer name.
    pub async fn handle(
        &self,
        filter: &WorkstationFilter,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ApplicationError> {
        let client_names: HashMap<_, _> = self
            .store
            .list_clients()
            .await?
            .into_iter()
            .map(|client| (client.id, client.name))
            .collect();
        let mut matching: Vec<_> = self
            .store
            .list_workstations()
            .await?
            .into_iter()
            .filter_map(|workstation| {
                let client_name = client_names.get(&workstation.client_id)?.clone();
                filter
                    .matches(&client_name, &workstation, MatchMode::Contains)
                    .then_some((client_name, workstation))
            })
            .collect();
        matching.sort_by(|(a_client, a), (b_client, b)| {
            a_client
                .cmp(b_client)
                .then_with(|| a.computer_name.cmp(&b.computer_name))
        });

        let rows: Vec<ExportRow> = matching
            .into_iter()
            .map(|(client_name, workstation)| {
                let completed = workstation
                    .completed_at
                    .map(|at| at.format(COMPLETED_DATE_FORMAT).to_string())
                    .unwrap_or_default();
                [
                    client_name,
                    workstation.computer_name,
                    workstation.ram_gb,
                    workstation.processor_name,
                    workstation.diskspace_remaining_gb,
                    workstation.status,
                    workstation.technician,
                    workstation.notes,
                    format_flag(workstation.updated_in_automate).to_string(),
                    completed,
                ]
            })
            .collect();

        match format {
            ExportFormat::Csv => write_csv(&rows),
            ExportFormat::Xlsx => write_xlsx(&rows),
        }
    }
}

fn write_csv(rows: &[ExportRow]) -> Result<Vec<u8>, ApplicationError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS).map_err(unexpected)?;
    for row in rows {
        writer.write_record(row).map_err(unexpected)?;
    }
    writer
        .into_inner()
        .map_err(|e| ApplicationError::Unexpected(e.to_string()))
}

/// Single sheet, header in the first row, every cell written as text.
fn write_xlsx(rows: &[ExportRow]) -> Result<Vec<u8>, ApplicationError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in (0u16..).zip(COLUMNS) {
        sheet.write_string(0, col, name).map_err(unexpected)?;
    }
    for (row_index, row) in (1u32..).zip(rows) {
        for (col, value) in (0u16..).zip(row) {
            if !value.is_empty() {
                sheet
                    .write_string(row_index, col, value.as_str())
                    .map_err(unexpected)?;
            }
        }
    }
    workbook.save_to_buffer().map_err(unexpected)
}

fn unexpected(err: impl ToString) -> ApplicationError {
    ApplicationError::Unexpected(err.to_string())
}
