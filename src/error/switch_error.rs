//! Unified error type for the switcher engine.

use thiserror::Error;

use crate::traits::TargetId;

/// Unified error type for the switcher engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    /// The committed target's action failed.
    ///
    /// The session has already released its resources by the time this is
    /// returned; termination is never conditional on activation outcome.
    #[error("activation failed for target {id}: {message}")]
    Activation { id: TargetId, message: String },
}

impl SwitchError {
    /// Build an activation failure for the given target.
    pub fn activation(id: TargetId, message: impl Into<String>) -> Self {
        Self::Activation {
            id,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_error_display() {
        let err = SwitchError::activation(TargetId::new("tab-3"), "window closed");
        assert_eq!(
            err.to_string(),
            "activation failed for target tab-3: window closed"
        );
    }

    #[test]
    fn test_activation_error_carries_target() {
        let err = SwitchError::activation(TargetId::new("tab-3"), "window closed");
        let SwitchError::Activation { id, .. } = err;
        assert_eq!(id, TargetId::new("tab-3"));
    }
}
