use crate::errors::{AppError, AppResult};
use crate::export::model::{AttendeeExport, attendee_to_row, get_headers};
use std::path::Path;

/// Write the roster rows as CSV.
pub fn export_csv(path: &Path, rows: &[AttendeeExport]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(attendee_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the roster rows as pretty-printed JSON.
pub fn export_json(path: &Path, rows: &[AttendeeExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
