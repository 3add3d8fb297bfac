use super::attendance::AttendanceState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One person registered for one event.
///
/// `check_in` / `check_out` are stored as epoch milliseconds in the database
/// (attendees.check_in / attendees.check_out, both nullable). The schema
/// guarantees check_out is never set while check_in is NULL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,
    pub community_id: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: Option<String>,
    pub title: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn new(
        id: String,
        community_id: String,
        first_name: String,
        last_name: String,
        company_name: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            id,
            community_id,
            first_name,
            last_name,
            company_name,
            title,
            check_in: None,
            check_out: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn state(&self) -> AttendanceState {
        AttendanceState::from_stamps(self.check_in.as_ref(), self.check_out.as_ref())
    }

    /// Checked in and not yet checked out.
    pub fn is_in_event(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }
}
