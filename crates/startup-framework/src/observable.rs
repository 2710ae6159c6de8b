//! # Observable Values
//!
//! [`Observable<T>`] holds exactly one current value and broadcasts every
//! change to its subscribers. Two tokio channels back it:
//!
//! - a [`tokio::sync::watch`] slot holding the current value, read by
//!   [`Observable::get`] and [`Subscription::current`]
//! - a [`tokio::sync::broadcast`] queue carrying each change, so a subscriber
//!   that falls behind still receives every intermediate value in order
//!
//! Semantics:
//!
//! - A new [`Subscription`] sees the current value immediately via
//!   [`Subscription::current`].
//! - Each logical change (a `set` with a value different from the current one)
//!   is delivered to every subscriber exactly once by [`Subscription::changed`],
//!   even when several changes happen before the subscriber polls.
//! - Setting a value equal to the current one is not a change and wakes nobody.
//! - Dropping the `Observable` ends every subscription: once the queued changes
//!   are drained, `changed()` returns `None`.
//!
//! A subscriber more than [`CHANGE_CAPACITY`] changes behind loses the oldest
//! ones; this is logged with `warn!`.
//!
//! ```rust
//! use startup_framework::Observable;
//!
//! #[tokio::main]
//! async fn main() {
//!     let message = Observable::new(String::from("loading"));
//!     let mut subscription = message.subscribe();
//!     assert_eq!(subscription.current(), "loading");
//!
//!     message.set(String::from("ready"));
//!     assert_eq!(subscription.changed().await.as_deref(), Some("ready"));
//! }
//! ```

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tracing::warn;

/// Changes buffered per subscriber before the oldest are dropped.
pub const CHANGE_CAPACITY: usize = 64;

/// Single current value with change notification.
#[derive(Debug)]
pub struct Observable<T> {
    current: watch::Sender<T>,
    changes: broadcast::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (current, _) = watch::channel(initial);
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Self { current, changes }
    }

    pub fn get(&self) -> T {
        self.current.borrow().clone()
    }

    /// Replaces the value, notifying subscribers if it changed.
    ///
    /// Returns whether a notification was sent.
    pub fn set(&self, value: T) -> bool {
        let modified = self.current.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value.clone();
                true
            }
        });
        if modified {
            // No subscribers is not an error.
            let _ = self.changes.send(value);
        }
        modified
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            changes: self.changes.subscribe(),
            current: self.current.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.receiver_count()
    }
}

/// Read-only view of an [`Observable`].
#[derive(Debug)]
pub struct Subscription<T> {
    current: watch::Receiver<T>,
    changes: broadcast::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// The latest value, without consuming a pending notification.
    pub fn current(&self) -> T {
        self.current.borrow().clone()
    }

    /// Waits for the next undelivered change and returns its value.
    ///
    /// Returns `None` once the owning [`Observable`] has been dropped and every
    /// queued change has been delivered.
    pub async fn changed(&mut self) -> Option<T> {
        loop {
            match self.changes.recv().await {
                Ok(value) => return Some(value),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Subscriber lagged, oldest changes dropped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Whether a change is waiting to be observed by [`Subscription::changed`].
    pub fn has_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_value_is_visible_on_subscribe() {
        let observable = Observable::new(1);
        let subscription = observable.subscribe();
        assert_eq!(subscription.current(), 1);
        assert!(!subscription.has_changed());
    }

    #[tokio::test]
    async fn test_equal_value_is_not_a_change() {
        let observable = Observable::new("same");
        let subscription = observable.subscribe();
        assert!(!observable.set("same"));
        assert!(!subscription.has_changed());
    }

    #[tokio::test]
    async fn test_set_without_subscribers_still_updates() {
        let observable = Observable::new(1);
        assert!(observable.set(2));
        assert_eq!(observable.get(), 2);
        assert_eq!(observable.subscribe().current(), 2);
    }

    #[tokio::test]
    async fn test_back_to_back_changes_are_each_delivered() {
        let observable = Observable::new(0u32);
        let mut subscription = observable.subscribe();

        assert!(observable.set(1));
        assert!(observable.set(2));

        assert_eq!(subscription.current(), 2);
        assert_eq!(subscription.changed().await, Some(1));
        assert!(subscription.has_changed());
        assert_eq!(subscription.changed().await, Some(2));
        assert!(!subscription.has_changed());
    }

    #[tokio::test]
    async fn test_queued_changes_survive_owner_drop() {
        let observable = Observable::new('a');
        let mut subscription = observable.subscribe();
        observable.set('b');
        drop(observable);

        assert_eq!(subscription.changed().await, Some('b'));
        assert_eq!(subscription.changed().await, None);
    }

    #[tokio::test]
    async fn test_dropping_owner_ends_subscriptions() {
        let observable = Observable::new(0);
        let mut subscription = observable.subscribe();
        drop(observable);
        assert_eq!(subscription.changed().await, None);
    }
}
