//! # Cart State
//!
//! The process-wide owner of the cart session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every screen reads and mutates the same cart
//! 2. Only one mutation may run at a time
//! 3. A mutation and the snapshot it publishes must not interleave with
//!    another mutation
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  command ──► lock ──► mutate session ──► snapshot ──► broadcast ──► unlock
//! │                              │                            │             │
//! │                              ▼                            ▼             │
//! │                       CartChange::Unchanged        CartEvent to every   │
//! │                       (nothing broadcast)          subscribed screen    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use entero_core::{CartChange, CartSession, CartSnapshot, CoreResult, DeliveryPolicy};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

/// Buffered events per subscriber before slow receivers start lagging.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Published after every mutation that changed the cart or the banner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEvent {
    pub change: CartChange,
    pub snapshot: CartSnapshot,
}

/// Shared cart session plus its change feed.
#[derive(Debug, Clone)]
pub struct CartState {
    session: Arc<Mutex<CartSession>>,
    events: broadcast::Sender<CartEvent>,
}

impl CartState {
    pub fn new(policy: DeliveryPolicy) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        CartState {
            session: Arc::new(Mutex::new(CartSession::new(policy))),
            events,
        }
    }

    /// A new receiver for cart events. Receivers only see events sent
    /// after they subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Executes a read-only closure against the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartSession) -> R,
    {
        let session = self.lock();
        f(&*session)
    }

    /// Executes a mutation and publishes the result.
    ///
    /// The snapshot returned on success is the same one subscribers receive.
    /// A failed mutation leaves the session as it was and publishes nothing.
    pub fn with_session_mut<F>(&self, f: F) -> CoreResult<(CartChange, CartSnapshot)>
    where
        F: FnOnce(&mut CartSession) -> CoreResult<CartChange>,
    {
        let mut session = self.lock();
        let change = f(&mut *session)?;
        let snapshot = session.snapshot();

        if change.is_change() {
            // No subscribers is not an error.
            let delivered = self
                .events
                .send(CartEvent {
                    change,
                    snapshot: snapshot.clone(),
                })
                .unwrap_or(0);
            trace!(?change, delivered, "cart event published");
        }

        Ok((change, snapshot))
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.with_session(CartSession::snapshot)
    }

    // Every session mutation leaves it consistent, so a panic in another
    // holder cannot leave half-applied state behind.
    fn lock(&self) -> MutexGuard<'_, CartSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(DeliveryPolicy::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use entero_core::{BannerVisibility, CartLineItem, Money};

    fn item(id: &str) -> CartLineItem {
        CartLineItem::new(id, format!("Product {}", id), Money::from_rupees(100))
    }

    #[test]
    fn test_mutation_returns_snapshot() {
        let state = CartState::default();
        let (change, snapshot) = state
            .with_session_mut(|s| s.add_to_cart(item("1")))
            .unwrap();

        assert_eq!(change, CartChange::Added);
        assert_eq!(snapshot.bill.item_count, 1);
        assert_eq!(state.snapshot(), snapshot);
    }

    #[test]
    fn test_clones_share_session() {
        let state = CartState::default();
        let other_screen = state.clone();

        state.with_session_mut(|s| s.add_to_cart(item("1"))).unwrap();

        assert_eq!(other_screen.with_session(|s| s.item_count()), 1);
    }

    #[tokio::test]
    async fn test_subscribers_receive_changes() {
        let state = CartState::default();
        let mut rx = state.subscribe();

        state.with_session_mut(|s| s.add_to_cart(item("1"))).unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.change, CartChange::Added);
        assert_eq!(event.snapshot.banner.visibility, BannerVisibility::Visible);
    }

    #[tokio::test]
    async fn test_unchanged_and_failed_mutations_are_silent() {
        let state = CartState::default();
        let mut rx = state.subscribe();

        state
            .with_session_mut(|s| Ok(s.remove_from_cart("missing")))
            .unwrap();
        assert!(state
            .with_session_mut(|s| s.update_quantity("missing", 3))
            .is_err());

        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let state = CartState::default();
        state.with_session_mut(|s| s.add_to_cart(item("1"))).unwrap();

        let poisoner = state.clone();
        let _ = std::thread::spawn(move || {
            poisoner.with_session(|_| panic!("screen crashed"));
        })
        .join();

        assert_eq!(state.with_session(|s| s.item_count()), 1);
    }
}
