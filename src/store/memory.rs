//! In-memory store implementation.
//! Backs the library tests and any embedding that does not want SQLite;
//! behaves like the database store, change notifications included.

use crate::errors::{AppError, AppResult};
use crate::models::{attendee::Attendee, community::Community};
use crate::store::watch::{ChangeHub, RosterChange, Subscription};
use crate::store::{AttendeeStore, CommunityStore, StampField};
use chrono::{DateTime, Utc};

pub struct MemoryStore {
    communities: Vec<Community>,
    attendees: Vec<Attendee>,
    hub: ChangeHub,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            communities: Vec::new(),
            attendees: Vec::new(),
            hub: ChangeHub::new(),
        }
    }

    pub fn insert_community(&mut self, community: Community) {
        self.communities.push(community);
    }

    pub fn insert_attendee(&mut self, attendee: Attendee) {
        self.attendees.push(attendee);
    }

    pub fn subscribe(&self, community_id: &str) -> Subscription {
        self.hub.subscribe(community_id)
    }

    pub fn hub(&self) -> &ChangeHub {
        &self.hub
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendeeStore for MemoryStore {
    fn find(&self, community_id: &str) -> AppResult<Vec<Attendee>> {
        Ok(self
            .attendees
            .iter()
            .filter(|a| a.community_id == community_id)
            .cloned()
            .collect())
    }

    fn get(&self, attendee_id: &str) -> AppResult<Option<Attendee>> {
        Ok(self.attendees.iter().find(|a| a.id == attendee_id).cloned())
    }

    fn update(
        &mut self,
        attendee_id: &str,
        field: StampField,
        value: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        let attendee = self
            .attendees
            .iter_mut()
            .find(|a| a.id == attendee_id)
            .ok_or_else(|| AppError::AttendeeNotFound(attendee_id.to_string()))?;

        match field {
            StampField::CheckIn => attendee.check_in = value,
            StampField::CheckOut => attendee.check_out = value,
        }

        let change = RosterChange {
            community_id: attendee.community_id.clone(),
            attendee_id: attendee.id.clone(),
            field,
        };
        self.hub.publish(&change);
        Ok(())
    }
}

impl CommunityStore for MemoryStore {
    fn find_all(&self) -> AppResult<Vec<Community>> {
        Ok(self.communities.clone())
    }

    fn get_community(&self, community_id: &str) -> AppResult<Option<Community>> {
        Ok(self
            .communities
            .iter()
            .find(|c| c.id == community_id)
            .cloned())
    }
}
