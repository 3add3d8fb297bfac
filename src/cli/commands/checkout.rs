use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::core::policy;
use crate::db::log::oplog;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::store::{AttendeeStore, Clock, SystemClock};
use crate::ui::messages::{success, warning};
use crate::utils::time::format_instant;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout { attendee, force } = cmd {
        let attendee_id = attendee.trim();
        if attendee_id.is_empty() {
            return Err(AppError::InvalidAttendeeId("(empty)".to_string()));
        }

        let mut store = SqliteStore::open(&cfg.database)?;

        // Presentation-side gate: inside the grace window the checkout
        // affordance is withheld, exactly like the UI button
        let now = SystemClock.now();
        if !force
            && let Some(row) = store.get(attendee_id)?
            && let Some(check_in) = row.check_in
            && row.is_in_event()
            && !policy::checkout_available(check_in, now)
        {
            warning(format!(
                "{} checked in {}s ago; checkout opens after a {}s grace period (use --force)",
                row.full_name(),
                (now - check_in).num_seconds(),
                policy::CHECKOUT_GRACE_SECS
            ));
            return Ok(());
        }

        let stamped = CheckinLogic::check_out(&mut store, &SystemClock, attendee_id)?;

        let attendee_row = store
            .get(attendee_id)?
            .ok_or_else(|| AppError::AttendeeNotFound(attendee_id.to_string()))?;

        oplog(
            &store.pool.conn,
            "checkout",
            attendee_id,
            &format!("{} checked out", attendee_row.full_name()),
        )?;

        success(format!(
            "{} checked out at {}",
            attendee_row.full_name(),
            format_instant(&stamped)
        ));
    }
    Ok(())
}
