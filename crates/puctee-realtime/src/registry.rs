//! Plan channel registry: plan → user → open subscriber channels.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use puctee_core::models::{PlanId, UserId};

/// Identifies one open connection. A user may hold several per plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct Subscriber {
    id: ConnectionId,
    sender: mpsc::UnboundedSender<String>,
}

/// Thread-safe fan-out registry using `DashMap` for concurrent access.
///
/// Empty user and plan entries are pruned as soon as their last
/// subscriber leaves.
#[derive(Clone, Default)]
pub struct PlanChannelRegistry {
    plans: Arc<DashMap<PlanId, HashMap<UserId, Vec<Subscriber>>>>,
}

impl PlanChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection. Messages broadcast to the plan arrive on the receiver.
    pub fn connect(
        &self,
        plan_id: PlanId,
        user_id: UserId,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = ConnectionId::new();
        self.plans
            .entry(plan_id)
            .or_default()
            .entry(user_id)
            .or_default()
            .push(Subscriber { id, sender });
        (id, receiver)
    }

    /// Remove one connection. Returns `false` if it was not registered.
    pub fn disconnect(&self, plan_id: PlanId, user_id: UserId, id: ConnectionId) -> bool {
        let removed = match self.plans.get_mut(&plan_id) {
            Some(mut users) => {
                let removed = match users.get_mut(&user_id) {
                    Some(subs) => {
                        let before = subs.len();
                        subs.retain(|s| s.id != id);
                        before != subs.len()
                    }
                    None => false,
                };
                if users.get(&user_id).is_some_and(|subs| subs.is_empty()) {
                    users.remove(&user_id);
                }
                removed
            }
            None => false,
        };
        self.plans.remove_if(&plan_id, |_, users| users.is_empty());
        removed
    }

    /// Send `message` to every subscriber of `plan_id`, including the sender's
    /// own connections. Closed channels are dropped. Returns the delivered count.
    pub fn broadcast(&self, plan_id: PlanId, message: &str) -> usize {
        let mut delivered = 0;
        if let Some(mut users) = self.plans.get_mut(&plan_id) {
            for subs in users.values_mut() {
                subs.retain(|s| match s.sender.send(message.to_string()) {
                    Ok(()) => {
                        delivered += 1;
                        true
                    }
                    Err(_) => false,
                });
            }
            users.retain(|_, subs| !subs.is_empty());
        }
        self.plans.remove_if(&plan_id, |_, users| users.is_empty());
        delivered
    }

    /// Open connections on a plan.
    pub fn subscriber_count(&self, plan_id: PlanId) -> usize {
        self.plans
            .get(&plan_id)
            .map(|users| users.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn is_connected(&self, plan_id: PlanId, user_id: UserId) -> bool {
        self.plans
            .get(&plan_id)
            .is_some_and(|users| users.contains_key(&user_id))
    }

    /// Users with at least one open connection on a plan.
    pub fn connected_users(&self, plan_id: PlanId) -> Vec<UserId> {
        let mut users: Vec<UserId> = self
            .plans
            .get(&plan_id)
            .map(|users| users.keys().copied().collect())
            .unwrap_or_default();
        users.sort_unstable();
        users
    }

    /// Plans with at least one open connection.
    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }
}
