//! Termination trigger contract.

use serde::{Deserialize, Serialize};

/// Opaque handle returned by [`TriggerSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerToken(u64);

impl TriggerToken {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Source of the session-ending signal, e.g. a held modifier being released.
///
/// The session subscribes once at open and unsubscribes exactly once on any
/// termination path (commit, cancel, or the trigger itself). Delivery is
/// same-thread and carries no payload: when the source decides the signal
/// has fired, the host calls
/// [`SwitchSession::terminate_from_trigger`](crate::session::SwitchSession::terminate_from_trigger).
pub trait TriggerSource {
    /// Register interest in the termination signal.
    fn subscribe(&self) -> TriggerToken;

    /// Release a subscription obtained from [`Self::subscribe`].
    fn unsubscribe(&self, token: TriggerToken);
}
