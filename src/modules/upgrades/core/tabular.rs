// Column layout shared by bulk import and export.

pub const COL_CLIENT_NAME: &str = "Client Name";
pub const COL_COMPUTER_NAME: &str = "Computer Name";
pub const COL_RAM_GB: &str = "RAM_GB";
pub const COL_PROCESSOR_NAME: &str = "Processor Name";
pub const COL_DISKSPACE_REMAINING_GB: &str = "DiskSpaceRemaining_GB";
pub const COL_STATUS: &str = "Status";
pub const COL_TECHNICIAN: &str = "Technician";
pub const COL_NOTES: &str = "Notes";
pub const COL_UPDATED_IN_AUTOMATE: &str = "Updated in Automate";
pub const COL_COMPLETED_DATE: &str = "Completed Date";

/// Export order. Import requires the first eight and accepts the last two.
pub const COLUMNS: [&str; 10] = [
    COL_CLIENT_NAME,
    COL_COMPUTER_NAME,
    COL_RAM_GB,
    COL_PROCESSOR_NAME,
    COL_DISKSPACE_REMAINING_GB,
    COL_STATUS,
    COL_TECHNICIAN,
    COL_NOTES,
    COL_UPDATED_IN_AUTOMATE,
    COL_COMPLETED_DATE,
];
pub const REQUIRED_COLUMNS: usize = 8;

pub const COMPLETED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_flag(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
