use serde::Serialize;

/// Display statistics for one event roster.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct RosterSummary {
    pub present: usize,
    pub not_checked_in: usize,
    pub by_company: Vec<String>,
}
