//! Store contracts backed by SQLite.
//! This is the production [`AttendeeStore`]/[`CommunityStore`]: CLI handlers
//! open one and pass it to the core, and every timestamp write is fanned out
//! to subscribers.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{attendee::Attendee, community::Community};
use crate::store::watch::{ChangeHub, RosterChange, Subscription};
use crate::store::{AttendeeStore, CommunityStore, StampField};
use chrono::{DateTime, Utc};

pub struct SqliteStore {
    pub pool: DbPool,
    hub: ChangeHub,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Ok(Self {
            pool,
            hub: ChangeHub::new(),
        })
    }

    pub fn subscribe(&self, community_id: &str) -> Subscription {
        self.hub.subscribe(community_id)
    }

    pub fn hub(&self) -> &ChangeHub {
        &self.hub
    }
}

impl AttendeeStore for SqliteStore {
    fn find(&self, community_id: &str) -> AppResult<Vec<Attendee>> {
        queries::load_attendees_by_community(&self.pool, community_id)
    }

    fn get(&self, attendee_id: &str) -> AppResult<Option<Attendee>> {
        queries::get_attendee(&self.pool, attendee_id)
    }

    fn update(
        &mut self,
        attendee_id: &str,
        field: StampField,
        value: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        // Need the owning community for the notification; fetch before the
        // write so a missing row fails without publishing anything.
        let attendee = queries::get_attendee(&self.pool, attendee_id)?;

        queries::update_stamp(&self.pool.conn, attendee_id, field, value)?;

        if let Some(attendee) = attendee {
            self.hub.publish(&RosterChange {
                community_id: attendee.community_id,
                attendee_id: attendee.id,
                field,
            });
        }
        Ok(())
    }
}

impl CommunityStore for SqliteStore {
    fn find_all(&self) -> AppResult<Vec<Community>> {
        queries::load_communities(&self.pool)
    }

    fn get_community(&self, community_id: &str) -> AppResult<Option<Community>> {
        queries::get_community(&self.pool, community_id)
    }
}
