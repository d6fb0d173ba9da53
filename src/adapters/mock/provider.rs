//! Mock target provider.

use std::sync::Arc;

use super::target::{MockSurface, MockTarget};
use crate::traits::{HostSurface, SwitchTarget, TargetProvider};

/// Provider over a fixed target list.
pub struct MockProvider {
    targets: Vec<Arc<MockTarget>>,
    current: Option<Arc<MockTarget>>,
    surface: Arc<MockSurface>,
}

impl MockProvider {
    pub fn new(targets: Vec<Arc<MockTarget>>) -> Self {
        Self {
            targets,
            current: None,
            surface: Arc::new(MockSurface),
        }
    }

    /// Report the given target as the presently focused one.
    ///
    /// The target does not have to be a member of the list; tests use that
    /// to simulate an inconsistent provider.
    pub fn with_current(mut self, target: &Arc<MockTarget>) -> Self {
        self.current = Some(Arc::clone(target));
        self
    }
}

impl TargetProvider for MockProvider {
    fn targets(&self) -> Vec<Arc<dyn SwitchTarget>> {
        self.targets
            .iter()
            .map(|t| Arc::clone(t) as Arc<dyn SwitchTarget>)
            .collect()
    }

    fn current_target(&self) -> Option<Arc<dyn SwitchTarget>> {
        self.current
            .as_ref()
            .map(|t| Arc::clone(t) as Arc<dyn SwitchTarget>)
    }

    fn surface(&self) -> Arc<dyn HostSurface> {
        Arc::clone(&self.surface) as Arc<dyn HostSurface>
    }
}
