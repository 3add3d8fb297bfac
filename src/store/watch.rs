//! Explicit observer registration for roster changes.
//! Subscribers hold a [`Subscription`] handle and receive [`RosterChange`]
//! notifications over a channel; dropping the handle tears the registration
//! down. Disconnected receivers are also pruned on publish.

use crate::store::StampField;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};

/// One timestamp write, as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterChange {
    pub community_id: String,
    pub attendee_id: String,
    pub field: StampField,
}

struct HubInner {
    next_id: u64,
    // (subscription id, community filter, sender)
    subscribers: Vec<(u64, String, Sender<RosterChange>)>,
}

/// Fan-out point owned by a store. Cloning shares the subscriber list.
#[derive(Clone)]
pub struct ChangeHub {
    inner: Arc<Mutex<HubInner>>,
}

impl ChangeHub {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HubInner {
                next_id: 1,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register an observer for one community's roster.
    pub fn subscribe(&self, community_id: &str) -> Subscription {
        let (tx, rx) = channel();
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, community_id.to_string(), tx));
        Subscription {
            id,
            hub: Arc::clone(&self.inner),
            rx,
        }
    }

    /// Deliver a change to every live subscriber of its community.
    pub fn publish(&self, change: &RosterChange) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.subscribers.retain(|(_, community, tx)| {
            if community != &change.community_id {
                return true;
            }
            tx.send(change.clone()).is_ok()
        });
    }

    pub fn subscriber_count(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.subscribers.len()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Live registration handle. Receives changes until dropped.
pub struct Subscription {
    id: u64,
    hub: Arc<Mutex<HubInner>>,
    rx: Receiver<RosterChange>,
}

impl Subscription {
    /// Next pending change, if any.
    pub fn try_recv(&self) -> Option<RosterChange> {
        self.rx.try_recv().ok()
    }

    /// Drain everything delivered so far.
    pub fn drain(&self) -> Vec<RosterChange> {
        let mut out = Vec::new();
        while let Ok(change) = self.rx.try_recv() {
            out.push(change);
        }
        out
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut inner = self.hub.lock().unwrap_or_else(|e| e.into_inner());
        inner.subscribers.retain(|(id, _, _)| *id != self.id);
    }
}
