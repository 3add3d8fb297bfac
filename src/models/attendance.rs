use chrono::{DateTime, Utc};
use serde::Serialize;

/// Attendance state of an attendee, derived from the two timestamp fields.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceState {
    NotArrived,
    Present,
    Departed,
}

impl AttendanceState {
    /// Derive the state from the (check_in, check_out) pair.
    /// A check-out without a check-in never leaves the store (schema CHECK),
    /// but if it ever did we still classify it as Departed.
    pub fn from_stamps(
        check_in: Option<&DateTime<Utc>>,
        check_out: Option<&DateTime<Utc>>,
    ) -> Self {
        match (check_in, check_out) {
            (None, None) => AttendanceState::NotArrived,
            (Some(_), None) => AttendanceState::Present,
            (_, Some(_)) => AttendanceState::Departed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceState::NotArrived => "not arrived",
            AttendanceState::Present => "present",
            AttendanceState::Departed => "departed",
        }
    }

    /// Transition table: NotArrived → Present → Departed, plus the two
    /// re-stamp loops and the deliberate Departed → Present re-entry.
    pub fn can_become(&self, next: AttendanceState) -> bool {
        matches!(
            (*self, next),
            (AttendanceState::NotArrived, AttendanceState::Present)
                | (AttendanceState::Present, AttendanceState::Present)
                | (AttendanceState::Present, AttendanceState::Departed)
                | (AttendanceState::Departed, AttendanceState::Departed)
                | (AttendanceState::Departed, AttendanceState::Present)
        )
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceState::Present)
    }
}
