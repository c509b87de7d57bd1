mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the attendance collection to `path` in the requested format.
/// An existing file is only overwritten with `force`.
pub fn write_records(
    format: &ExportFormat,
    path: &str,
    records: &[AttendanceRecord],
    force: bool,
) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "output file '{path}' already exists (use --force to overwrite)"
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, records)?,
        ExportFormat::Json => json::write_json(path, records)?,
    }

    notify_export_success(format.as_str().to_uppercase().as_str(), Path::new(path));
    Ok(())
}

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
