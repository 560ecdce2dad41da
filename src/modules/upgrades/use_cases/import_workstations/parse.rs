use chrono::{DateTime, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::modules::upgrades::core::tabular::{
    COL_CLIENT_NAME, COL_COMPLETED_DATE, COL_COMPUTER_NAME, COL_DISKSPACE_REMAINING_GB,
    COL_NOTES, COL_PROCESSOR_NAME, COL_RAM_GB, COL_STATUS, COL_TECHNICIAN,
    COL_UPDATED_IN_AUTOMATE, COLUMNS, COMPLETED_DATE_FORMAT, REQUIRED_COLUMNS,
};
use crate::modules::upgrades::core::workstation::{PLACEHOLDER_STATUS, STATUS_COMPLETED, parse_flag};
use crate::shared::infrastructure::dashboard_store::SnapshotRow;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

struct ColumnIndex {
    positions: [Option<usize>; COLUMNS.len()],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, ImportError> {
        let mut positions = [None; COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(COLUMNS) {
            *slot = headers.iter().position(|header| header == name);
        }
        if let Some(missing) = COLUMNS[..REQUIRED_COLUMNS]
            .iter()
            .zip(&positions)
            .find_map(|(name, position)| position.is_none().then_some(*name))
        {
            return Err(ImportError::MissingColumn(missing));
        }
        Ok(Self { positions })
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        COLUMNS
            .iter()
            .position(|name| *name == column)
            .and_then(|slot| self.positions[slot])
            .and_then(|position| record.get(position))
            .unwrap_or("")
    }
}

/// Parses a whole export-format file. Any malformed row fails the whole file.
pub fn parse_snapshot(input: &[u8], now: DateTime<Utc>) -> Result<Vec<SnapshotRow>, ImportError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let headers = reader.headers().map_err(malformed)?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        let client_name = columns.get(&record, COL_CLIENT_NAME);
        if client_name.is_empty() {
            continue;
        }

        let status = match columns.get(&record, COL_STATUS) {
            "" => PLACEHOLDER_STATUS,
            status => status,
        };
        let (updated_in_automate, completed_at) = if status == STATUS_COMPLETED {
            (
                parse_flag(columns.get(&record, COL_UPDATED_IN_AUTOMATE)),
                Some(parse_completed_date(columns.get(&record, COL_COMPLETED_DATE)).unwrap_or(now)),
            )
        } else {
            (false, None)
        };

        rows.push(SnapshotRow {
            client_name: client_name.to_string(),
            computer_name: columns.get(&record, COL_COMPUTER_NAME).to_string(),
            ram_gb: columns.get(&record, COL_RAM_GB).to_string(),
            processor_name: columns.get(&record, COL_PROCESSOR_NAME).to_string(),
            diskspace_remaining_gb: columns.get(&record, COL_DISKSPACE_REMAINING_GB).to_string(),
            status: status.to_string(),
            technician: columns.get(&record, COL_TECHNICIAN).to_string(),
            notes: columns.get(&record, COL_NOTES).to_string(),
            updated_in_automate,
            completed_at,
        });
    }
    Ok(rows)
}

fn parse_completed_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, COMPLETED_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn malformed(err: csv::Error) -> ImportError {
    let line = err.position().map_or(0, |position| position.line());
    let reason = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields, found {len}"),
        csv::ErrorKind::Utf8 { .. } => "invalid UTF-8".to_string(),
        _ => err.to_string(),
    };
    ImportError::Malformed { line, reason }
}

#[cfg(test)]
mod parse_snapshot_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    const HEADER: &str = "Client Name,Computer Name,RAM_GB,Processor Name,DiskSpaceRemaining_GB,Status,Technician,Notes,Updated in Automate,Completed Date";

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap()
    }

    fn parse(body: &str, now: DateTime<Utc>) -> Result<Vec<SnapshotRow>, ImportError> {
        parse_snapshot(body.as_bytes(), now)
    }

    #[rstest]
    fn it_should_read_every_column(now: DateTime<Utc>) {
        let body = format!(
            "{HEADER}\nAcme Corp,WS-01,16,Intel Core i5,120,Completed,Brian,new SSD,yes,2026-04-30 16:45\n"
        );

        let rows = parse(&body, now).unwrap();

        assert_eq!(
            rows,
            vec![SnapshotRow {
                client_name: "Acme Corp".into(),
                computer_name: "WS-01".into(),
                ram_gb: "16".into(),
                processor_name: "Intel Core i5".into(),
                diskspace_remaining_gb: "120".into(),
                status: "Completed".into(),
                technician: "Brian".into(),
                notes: "new SSD".into(),
                updated_in_automate: true,
                completed_at: Some(Utc.with_ymd_and_hms(2026, 4, 30, 16, 45, 0).unwrap()),
            }]
        );
    }

    #[rstest]
    fn it_should_accept_files_without_the_optional_columns(now: DateTime<Utc>) {
        let body = "Client Name,Computer Name,RAM_GB,Processor Name,DiskSpaceRemaining_GB,Status,Technician,Notes\nAcme Corp,WS-01,8,i3,40,,,\n";

        let rows = parse(body, now).unwrap();

        assert_eq!(rows[0].status, PLACEHOLDER_STATUS);
        assert!(!rows[0].updated_in_automate);
        assert_eq!(rows[0].completed_at, None);
    }

    #[rstest]
    fn it_should_default_the_completion_date_to_now(now: DateTime<Utc>) {
        let body = format!("{HEADER}\nAcme Corp,WS-01,8,i3,40,Completed,Ed,,no,someday\n");
        assert_eq!(parse(&body, now).unwrap()[0].completed_at, Some(now));
    }

    #[rstest]
    fn it_should_ignore_flag_and_date_on_open_rows(now: DateTime<Utc>) {
        let body = format!("{HEADER}\nAcme Corp,WS-01,8,i3,40,In Progress,Ed,,yes,2026-04-30 16:45\n");

        let row = &parse(&body, now).unwrap()[0];

        assert!(!row.updated_in_automate);
        assert_eq!(row.completed_at, None);
    }

    #[rstest]
    fn it_should_skip_rows_without_a_client(now: DateTime<Utc>) {
        let body = format!("{HEADER}\n,WS-00,8,i3,40,,,,,\nAcme Corp,WS-01,8,i3,40,,,,,\n");
        assert_eq!(parse(&body, now).unwrap().len(), 1);
    }

    #[rstest]
    fn it_should_name_the_missing_required_column(now: DateTime<Utc>) {
        let body = "Client Name,Computer Name,RAM_GB\nAcme Corp,WS-01,8\n";
        assert_eq!(
            parse(body, now),
            Err(ImportError::MissingColumn("Processor Name"))
        );
    }

    #[rstest]
    fn it_should_report_the_line_of_a_ragged_row(now: DateTime<Utc>) {
        let body = format!("{HEADER}\nAcme Corp,WS-01,8,i3,40,,,,,\nAcme Corp,WS-02\n");

        let err = parse(&body, now).unwrap_err();

        assert_eq!(
            err,
            ImportError::Malformed {
                line: 3,
                reason: "expected 10 fields, found 2".into()
            }
        );
    }
}
