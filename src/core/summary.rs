//! Roster aggregation: pure functions over an in-memory attendee list.
//! The caller is responsible for pre-filtering by event; these functions
//! never touch the store.

use crate::models::attendee::Attendee;

/// Attendees currently in the event (checked in, not checked out).
pub fn count_present(attendees: &[Attendee]) -> usize {
    attendees.iter().filter(|a| a.is_in_event()).count()
}

/// Attendees that never checked in.
pub fn count_not_checked_in(attendees: &[Attendee]) -> usize {
    attendees.iter().filter(|a| a.check_in.is_none()).count()
}

/// Group the currently-present attendees by company.
///
/// Attendees without a company are skipped entirely. Grouping is by exact,
/// case-sensitive name equality. Output entries are `"<name> (<count>)"`,
/// ordered by each company's first occurrence in the input. When nothing
/// remains the literal `["none"]` is returned.
pub fn group_present_by_company(attendees: &[Attendee]) -> Vec<String> {
    let mut companies: Vec<(&str, usize)> = Vec::new();

    for attendee in attendees.iter().filter(|a| a.is_in_event()) {
        let Some(name) = attendee.company_name.as_deref() else {
            continue;
        };

        match companies.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => companies.push((name, 1)),
        }
    }

    if companies.is_empty() {
        return vec!["none".to_string()];
    }

    companies
        .into_iter()
        .map(|(name, count)| format!("{} ({})", name, count))
        .collect()
}
