use std::sync::atomic::{AtomicU64, Ordering};

use crate::state::SquaresState;

// Single static counter for all observer handles
static NEXT_OBSERVER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned by [`StateStore::subscribe`]; pass it back to
/// [`StateStore::unsubscribe`] to stop deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    fn next() -> Self {
        Self(NEXT_OBSERVER_ID.fetch_add(1, Ordering::SeqCst))
    }
}

type Observer = Box<dyn FnMut(&SquaresState)>;

/// A single mutable cell holding the latest snapshot, broadcast
/// synchronously to registered observers in registration order.
///
/// Subscription has replay-last semantics: the new observer is invoked once
/// with the held snapshot before `subscribe` returns, so it never misses
/// the current state however late it joins. No history is buffered beyond
/// the current snapshot.
pub struct StateStore {
    latest: SquaresState,
    observers: Vec<(ObserverId, Observer)>,
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("latest", &self.latest)
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            latest: SquaresState::initial(),
            observers: Vec::new(),
        }
    }

    /// The held snapshot, without subscribing.
    pub fn current(&self) -> &SquaresState {
        &self.latest
    }

    /// Replaces the held value and synchronously notifies every observer.
    ///
    /// Observers run in-line; a slow observer delays the ones registered
    /// after it.
    pub fn publish(&mut self, snapshot: SquaresState) {
        self.latest = snapshot;
        for (_, observer) in &mut self.observers {
            observer(&self.latest);
        }
    }

    /// Registers an observer, replaying the held snapshot to it exactly
    /// once before returning.
    pub fn subscribe(&mut self, observer: impl FnMut(&SquaresState) + 'static) -> ObserverId {
        let id = ObserverId::next();
        let mut observer: Observer = Box::new(observer);
        observer(&self.latest);
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer; subsequent publishes no longer reach it.
    /// Returns false if the handle was not registered here.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
