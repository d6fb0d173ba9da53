//! Mock trigger source.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::traits::{TriggerSource, TriggerToken};

/// Trigger source that records subscribe/unsubscribe traffic.
pub struct MockTrigger {
    next_token: AtomicU64,
    active: Mutex<Vec<TriggerToken>>,
    subscribes: AtomicU64,
    unsubscribes: AtomicU64,
}

impl MockTrigger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_token: AtomicU64::new(1),
            active: Mutex::new(Vec::new()),
            subscribes: AtomicU64::new(0),
            unsubscribes: AtomicU64::new(0),
        })
    }

    pub fn subscribe_count(&self) -> u64 {
        self.subscribes.load(Ordering::SeqCst)
    }

    pub fn unsubscribe_count(&self) -> u64 {
        self.unsubscribes.load(Ordering::SeqCst)
    }

    /// Subscriptions that have not been released yet.
    pub fn active_subscriptions(&self) -> usize {
        self.active.lock().expect("mock trigger lock").len()
    }
}

impl TriggerSource for MockTrigger {
    fn subscribe(&self) -> TriggerToken {
        let token = TriggerToken::new(self.next_token.fetch_add(1, Ordering::SeqCst));
        self.subscribes.fetch_add(1, Ordering::SeqCst);
        self.active.lock().expect("mock trigger lock").push(token);
        token
    }

    fn unsubscribe(&self, token: TriggerToken) {
        self.unsubscribes.fetch_add(1, Ordering::SeqCst);
        self.active
            .lock()
            .expect("mock trigger lock")
            .retain(|t| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_trigger_tracks_subscriptions() {
        let trigger = MockTrigger::new();
        assert_eq!(trigger.active_subscriptions(), 0);

        let token = trigger.subscribe();
        assert_eq!(trigger.subscribe_count(), 1);
        assert_eq!(trigger.active_subscriptions(), 1);

        trigger.unsubscribe(token);
        assert_eq!(trigger.unsubscribe_count(), 1);
        assert_eq!(trigger.active_subscriptions(), 0);
    }

    #[test]
    fn test_mock_trigger_tokens_are_distinct() {
        let trigger = MockTrigger::new();
        assert_ne!(trigger.subscribe(), trigger.subscribe());
    }
}
