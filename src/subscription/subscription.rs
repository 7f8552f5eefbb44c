use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::state::Snapshot;

pub(crate) type Subscriber<S> = Rc<dyn Fn(&Snapshot<S>)>;

/// Identifies one subscriber within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Live subscribers of a store, in subscription order.
pub(crate) struct Subscribers<S> {
    next_id: u64,
    entries: Vec<(SubscriberId, Subscriber<S>)>,
}

impl<S> Subscribers<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, subscriber: Subscriber<S>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn get(&self, id: SubscriberId) -> Option<Subscriber<S>> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, subscriber)| Rc::clone(subscriber))
    }

    /// Ids of the current subscribers, for iterating without holding a borrow.
    pub(crate) fn ids(&self) -> Vec<SubscriberId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

pub(crate) trait Detach {
    fn detach(&self, id: SubscriberId) -> bool;
}

impl<S> Detach for RefCell<Subscribers<S>> {
    fn detach(&self, id: SubscriberId) -> bool {
        self.borrow_mut().remove(id)
    }
}

/// Removes a freshly inserted subscriber unless disarmed.
///
/// Covers a subscriber that panics during its immediate call, before any
/// [`Subscription`] exists to remove it.
pub(crate) struct PendingSubscriber<'a, S> {
    subscribers: &'a RefCell<Subscribers<S>>,
    id: SubscriberId,
    armed: bool,
}

impl<'a, S> PendingSubscriber<'a, S> {
    pub(crate) fn new(subscribers: &'a RefCell<Subscribers<S>>, id: SubscriberId) -> Self {
        Self {
            subscribers,
            id,
            armed: true,
        }
    }

    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl<S> Drop for PendingSubscriber<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            self.subscribers.borrow_mut().remove(self.id);
        }
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Dropping the handle does not unsubscribe; call
/// [`unsubscribe`](Subscription::unsubscribe) for that.
pub struct Subscription {
    id: SubscriberId,
    owner: Weak<dyn Detach>,
}

impl Subscription {
    pub(crate) fn new<S: 'static>(id: SubscriberId, owner: &Rc<RefCell<Subscribers<S>>>) -> Self {
        let owner: Weak<RefCell<Subscribers<S>>> = Rc::downgrade(owner);
        let owner: Weak<dyn Detach> = owner;
        Self { id, owner }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Stop receiving notifications.
    ///
    /// Calling this more than once, or after the store is gone, does nothing.
    pub fn unsubscribe(&self) {
        let Some(owner) = self.owner.upgrade() else {
            return;
        };
        if owner.detach(self.id) {
            tracing::debug!(subscriber = %self.id, "unsubscribed");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
