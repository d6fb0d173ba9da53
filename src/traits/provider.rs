//! Target provider contract.

use std::sync::Arc;

use super::target::{HostSurface, SwitchTarget};

/// Supplies the target set for one navigation session.
///
/// The session queries the provider exactly once at open; target geometry is
/// resolved separately through [`SwitchTarget::rectangle`] on every
/// directional command. The provider is read-only from the session's point
/// of view.
pub trait TargetProvider {
    /// The full set of activatable targets.
    fn targets(&self) -> Vec<Arc<dyn SwitchTarget>>;

    /// The presently active/focused target, if any.
    ///
    /// A target returned here that is not a member of [`Self::targets`] is
    /// treated by the session as "no current selection", not as a failure.
    fn current_target(&self) -> Option<Arc<dyn SwitchTarget>>;

    /// The surface used to resolve target rectangles.
    fn surface(&self) -> Arc<dyn HostSurface>;
}
