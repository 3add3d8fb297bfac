use crate::models::attendee::Attendee;
use crate::utils::time;
use serde::Serialize;

/// Flat attendee row for export files.
#[derive(Serialize, Clone, Debug)]
pub struct AttendeeExport {
    pub id: String,
    pub event: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub title: String,
    pub state: String,
    pub check_in: String,
    pub check_out: String,
}

impl AttendeeExport {
    pub fn from_attendee(attendee: &Attendee) -> Self {
        Self {
            id: attendee.id.clone(),
            event: attendee.community_id.clone(),
            first_name: attendee.first_name.clone(),
            last_name: attendee.last_name.clone(),
            company_name: attendee.company_name.clone().unwrap_or_default(),
            title: attendee.title.clone().unwrap_or_default(),
            state: attendee.state().as_str().to_string(),
            check_in: attendee
                .check_in
                .as_ref()
                .map(time::format_instant)
                .unwrap_or_default(),
            check_out: attendee
                .check_out
                .as_ref()
                .map(time::format_instant)
                .unwrap_or_default(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "event",
        "first_name",
        "last_name",
        "company_name",
        "title",
        "state",
        "check_in",
        "check_out",
    ]
}

pub(crate) fn attendee_to_row(a: &AttendeeExport) -> Vec<String> {
    vec![
        a.id.clone(),
        a.event.clone(),
        a.first_name.clone(),
        a.last_name.clone(),
        a.company_name.clone(),
        a.title.clone(),
        a.state.clone(),
        a.check_in.clone(),
        a.check_out.clone(),
    ]
}
