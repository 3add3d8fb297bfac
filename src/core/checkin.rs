use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceState;
use crate::store::{AttendeeStore, Clock, StampField};
use chrono::{DateTime, Utc};

/// High-level business logic for check-in and check-out.
///
/// Both operations re-stamp on repetition (last write wins, which keeps them
/// safe under the store's concurrent-write semantics) and go through the
/// store's single-field update. The attendee id is assumed to be validated
/// at the caller's boundary.
pub struct CheckinLogic;

impl CheckinLogic {
    /// Stamp the attendee as arrived. Returns the stamped instant.
    ///
    /// Allowed from NotArrived, Present (re-stamp) and Departed (re-entry).
    /// Re-entry clears the previous check-out first, so the two per-field
    /// writes never leave a check-out earlier than the check-in.
    pub fn check_in<S>(store: &mut S, clock: &dyn Clock, attendee_id: &str) -> AppResult<DateTime<Utc>>
    where
        S: AttendeeStore + ?Sized,
    {
        let attendee = store
            .get(attendee_id)?
            .ok_or_else(|| AppError::AttendeeNotFound(attendee_id.to_string()))?;

        let state = attendee.state();
        if !state.can_become(AttendanceState::Present) {
            return Err(AppError::Transition(format!(
                "{} cannot check in while {}",
                attendee.full_name(),
                state.as_str()
            )));
        }

        if state == AttendanceState::Departed {
            store.update(attendee_id, StampField::CheckOut, None)?;
        }

        let now = clock.now();
        store.update(attendee_id, StampField::CheckIn, Some(now))?;
        Ok(now)
    }

    /// Stamp the attendee as departed. Returns the stamped instant.
    ///
    /// Rejected while NotArrived: a check-out always implies a prior
    /// check-in. Repeating it while Departed re-stamps.
    pub fn check_out<S>(store: &mut S, clock: &dyn Clock, attendee_id: &str) -> AppResult<DateTime<Utc>>
    where
        S: AttendeeStore + ?Sized,
    {
        let attendee = store
            .get(attendee_id)?
            .ok_or_else(|| AppError::AttendeeNotFound(attendee_id.to_string()))?;

        let state = attendee.state();
        if !state.can_become(AttendanceState::Departed) {
            return Err(AppError::Transition(format!(
                "{} never checked in",
                attendee.full_name()
            )));
        }

        let now = clock.now();
        store.update(attendee_id, StampField::CheckOut, Some(now))?;
        Ok(now)
    }
}
