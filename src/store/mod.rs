//! Store and clock contracts consumed by the core.
//! The core never touches a concrete backend: repository handles are passed
//! in explicitly, and change notification goes through [`watch::ChangeHub`]
//! rather than any ambient subscription state.

pub mod memory;
pub mod watch;

use crate::errors::AppResult;
use crate::models::{attendee::Attendee, community::Community};
use chrono::{DateTime, Utc};

/// The two mutable timestamp fields of an attendee row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampField {
    CheckIn,
    CheckOut,
}

impl StampField {
    /// Column name in the attendees table.
    pub fn column(&self) -> &'static str {
        match self {
            StampField::CheckIn => "check_in",
            StampField::CheckOut => "check_out",
        }
    }
}

/// Read/write access to attendee records.
///
/// `find` returns the roster in stable load order. `update` writes a single
/// timestamp field atomically; a failed write must leave the row unchanged.
pub trait AttendeeStore {
    fn find(&self, community_id: &str) -> AppResult<Vec<Attendee>>;
    fn get(&self, attendee_id: &str) -> AppResult<Option<Attendee>>;
    fn update(
        &mut self,
        attendee_id: &str,
        field: StampField,
        value: Option<DateTime<Utc>>,
    ) -> AppResult<()>;
}

/// Read access to the community/event list.
/// `get_community` is not called `get` so that a store implementing both
/// contracts stays unambiguous at call sites.
pub trait CommunityStore {
    fn find_all(&self) -> AppResult<Vec<Community>>;
    fn get_community(&self, community_id: &str) -> AppResult<Option<Community>>;
}

/// Time source injected into the mutator and the gating policy.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
