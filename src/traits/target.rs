//! Target and host-surface contracts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SwitchResult;
use crate::geometry::Rect;

/// Opaque identifier for a switch target.
///
/// Identifiers support equality and hashing but carry no ordering; they must
/// be unique within one session's target set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Handle to the surface that owns target coordinate spaces.
///
/// The session never inspects the surface itself; it only threads the handle
/// through to [`SwitchTarget::rectangle`] so targets can resolve their
/// geometry against the current layout of the host.
pub trait HostSurface {}

/// An activatable, spatially positioned candidate the user can switch to.
pub trait SwitchTarget {
    /// Stable identity within one session's target set.
    fn id(&self) -> TargetId;

    /// Current rectangle on the given surface.
    ///
    /// Called on every directional query: the layout may shift between
    /// navigation steps, so implementations must report the live geometry
    /// rather than a value captured at session open.
    fn rectangle(&self, surface: &dyn HostSurface) -> Rect;

    /// Perform the target's action.
    ///
    /// Invoked at most once per session, only on commit or trigger
    /// termination.
    fn activate(&self) -> SwitchResult<()>;
}
