use crate::db::pool::DbPool;
use crate::db::queries::{load_attendees_by_community, load_communities};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::AttendeeExport;
use crate::export::notify_export_success;
use crate::utils::path::is_absolute;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the roster of one event, or of every event when `event` is
    /// None. `file` must be an absolute path.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        event: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows = Self::collect_rows(pool, event)?;

        match format {
            ExportFormat::Csv => {
                export_csv(path, &rows)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                export_json(path, &rows)?;
                notify_export_success("JSON", path);
            }
        }

        Ok(())
    }

    fn collect_rows(pool: &DbPool, event: Option<&str>) -> AppResult<Vec<AttendeeExport>> {
        let mut rows = Vec::new();

        match event {
            Some(community_id) => {
                for attendee in load_attendees_by_community(pool, community_id)? {
                    rows.push(AttendeeExport::from_attendee(&attendee));
                }
            }
            None => {
                for community in load_communities(pool)? {
                    for attendee in load_attendees_by_community(pool, &community.id)? {
                        rows.push(AttendeeExport::from_attendee(&attendee));
                    }
                }
            }
        }

        Ok(rows)
    }
}
