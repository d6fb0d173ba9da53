//! Held-modifier termination trigger for crossterm hosts.
//!
//! The canonical switcher interaction starts with a modifier chord (say
//! Ctrl+Alt held down) and ends the moment the user lets go. The host feeds
//! every key event through [`HeldModifierTrigger::hold_released`]; once it
//! reports `true`, the host calls
//! [`SwitchSession::terminate_from_trigger`](crate::session::SwitchSession::terminate_from_trigger).
//! The session itself only sees the subscribe/unsubscribe side of the trait.

use std::sync::atomic::{AtomicU64, Ordering};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::geometry::Direction;
use crate::traits::{TriggerSource, TriggerToken};

/// Trigger source tied to a held modifier combination.
pub struct HeldModifierTrigger {
    held: KeyModifiers,
    next_token: AtomicU64,
}

impl HeldModifierTrigger {
    /// Track the modifiers of the chord that opened the session.
    pub fn new(held: KeyModifiers) -> Self {
        Self {
            held,
            next_token: AtomicU64::new(1),
        }
    }

    /// The modifier set being tracked.
    pub fn held(&self) -> KeyModifiers {
        self.held
    }

    /// Whether this event shows the hold has been released.
    ///
    /// True when the event no longer carries any of the tracked modifiers.
    /// A key pressed with at least one of them still down keeps the session
    /// alive.
    pub fn hold_released(&self, event: &KeyEvent) -> bool {
        !event.modifiers.intersects(self.held)
    }
}

impl TriggerSource for HeldModifierTrigger {
    fn subscribe(&self) -> TriggerToken {
        TriggerToken::new(self.next_token.fetch_add(1, Ordering::SeqCst))
    }

    fn unsubscribe(&self, _token: TriggerToken) {}
}

/// Map arrow keys to navigation directions.
///
/// Returns `None` for every other key; the host decides what those mean.
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
