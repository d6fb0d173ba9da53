//! Mock target and host surface.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{SwitchError, SwitchResult};
use crate::geometry::Rect;
use crate::traits::{HostSurface, SwitchTarget, TargetId};

/// Placeholder host surface; the mock target ignores it.
pub struct MockSurface;

impl HostSurface for MockSurface {}

/// Mock switch target with adjustable geometry and an activation counter.
///
/// Handed out as `Arc<MockTarget>` so tests keep a handle for assertions
/// while the session holds its own.
pub struct MockTarget {
    id: TargetId,
    rect: Mutex<Rect>,
    activations: AtomicUsize,
    fail_activation: bool,
}

impl MockTarget {
    pub fn new(id: impl Into<String>, rect: Rect) -> Arc<Self> {
        Arc::new(Self {
            id: TargetId::new(id),
            rect: Mutex::new(rect),
            activations: AtomicUsize::new(0),
            fail_activation: false,
        })
    }

    /// A target whose `activate` always fails.
    pub fn failing(id: impl Into<String>, rect: Rect) -> Arc<Self> {
        Arc::new(Self {
            id: TargetId::new(id),
            rect: Mutex::new(rect),
            activations: AtomicUsize::new(0),
            fail_activation: true,
        })
    }

    /// Move the target, simulating a layout shift mid-session.
    pub fn set_rect(&self, rect: Rect) {
        *self.rect.lock().expect("mock rect lock") = rect;
    }

    /// How many times `activate` ran.
    pub fn activations(&self) -> usize {
        self.activations.load(Ordering::SeqCst)
    }
}

impl SwitchTarget for MockTarget {
    fn id(&self) -> TargetId {
        self.id.clone()
    }

    fn rectangle(&self, _surface: &dyn HostSurface) -> Rect {
        *self.rect.lock().expect("mock rect lock")
    }

    fn activate(&self) -> SwitchResult<()> {
        self.activations.fetch_add(1, Ordering::SeqCst);
        if self.fail_activation {
            return Err(SwitchError::activation(
                self.id.clone(),
                "mock activation failure",
            ));
        }
        Ok(())
    }
}
