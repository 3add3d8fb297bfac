use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::db::log::oplog;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::store::{AttendeeStore, SystemClock};
use crate::ui::messages::success;
use crate::utils::time::format_instant;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { attendee } = cmd {
        // Boundary validation: the core assumes a well-formed id
        let attendee_id = attendee.trim();
        if attendee_id.is_empty() {
            return Err(AppError::InvalidAttendeeId("(empty)".to_string()));
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        let stamped = CheckinLogic::check_in(&mut store, &SystemClock, attendee_id)?;

        let attendee_row = store
            .get(attendee_id)?
            .ok_or_else(|| AppError::AttendeeNotFound(attendee_id.to_string()))?;

        oplog(
            &store.pool.conn,
            "checkin",
            attendee_id,
            &format!("{} checked in", attendee_row.full_name()),
        )?;

        success(format!(
            "{} checked in at {}",
            attendee_row.full_name(),
            format_instant(&stamped)
        ));
    }
    Ok(())
}
