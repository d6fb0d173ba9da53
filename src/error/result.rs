//! Result type alias for consistent return types.

use super::switch_error::SwitchError;

/// Result alias used across the crate.
pub type SwitchResult<T> = Result<T, SwitchError>;
