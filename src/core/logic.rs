use crate::core::summary;
use crate::models::{attendee::Attendee, roster_summary::RosterSummary};

pub struct Core;

impl Core {
    pub fn build_roster_summary(attendees: &[Attendee]) -> RosterSummary {
        RosterSummary {
            present: summary::count_present(attendees),
            not_checked_in: summary::count_not_checked_in(attendees),
            by_company: summary::group_present_by_company(attendees),
        }
    }
}
