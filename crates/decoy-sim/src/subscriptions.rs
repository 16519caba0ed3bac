//! Lifecycle registration for host notifications.
//!
//! A session registers interest when it activates and holds the returned
//! handles; releasing a handle consumes it, so teardown is explicit.

use std::collections::BTreeMap;

use hecs::Entity;

/// Notification a session can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// The caster readied another spell.
    SpellReadied(Entity),
    /// The entity's health reached zero.
    Died(Entity),
    /// A spell bundle was assigned to the entity.
    BundleAssigned(Entity),
}

/// Owned subscription handle.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
    topic: Topic,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }
}

#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    next_id: u64,
    entries: BTreeMap<u64, (Topic, u32)>,
}

impl SubscriptionRegistry {
    pub fn subscribe(&mut self, topic: Topic, session: u32) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, (topic, session));
        Subscription { id, topic }
    }

    /// Drop a subscription. Releasing a handle whose entry is already gone is a no-op.
    pub fn release(&mut self, subscription: Subscription) {
        self.entries.remove(&subscription.id);
    }

    /// Sessions listening to `topic`, in subscription order, without duplicates.
    pub fn subscribers(&self, topic: Topic) -> Vec<u32> {
        let mut sessions = Vec::new();
        for &(t, session) in self.entries.values() {
            if t == topic && !sessions.contains(&session) {
                sessions.push(session);
            }
        }
        sessions
    }

    pub fn is_subscribed(&self, session: u32, topic: Topic) -> bool {
        self.entries
            .values()
            .any(|&(t, s)| t == topic && s == session)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
