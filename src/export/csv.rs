use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use csv::Writer;

/// Write the records as CSV, one row per clock event.
pub fn write_csv(path: &str, records: &[AttendanceRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| crate::errors::AppError::Export(e.to_string()))?;

    wtr.write_record(["id", "userId", "userName", "type", "timestamp", "approved"])
        .map_err(|e| crate::errors::AppError::Export(e.to_string()))?;

    for rec in records {
        wtr.write_record(&[
            rec.id.to_string(),
            rec.user_id.to_string(),
            rec.user_name.clone(),
            rec.kind.as_str().to_string(),
            rec.timestamp.to_rfc3339(),
            rec.approved.to_string(),
        ])
        .map_err(|e| crate::errors::AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
