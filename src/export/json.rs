use crate::errors::AppResult;
use crate::models::AttendanceRecord;

/// Write the records as pretty-printed JSON.
pub fn write_json(path: &str, records: &[AttendanceRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
