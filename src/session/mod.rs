//! Navigation session lifecycle and state.
//!
//! A [`SwitchSession`] owns the live target list and the current selection
//! for one interaction, from open to termination. Directional commands move
//! the selection through the pure selector; commit, cancel, or the external
//! trigger end the interaction. All operations are synchronous and run on
//! the host's single UI/event thread.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SwitchResult;
use crate::geometry::Direction;
use crate::selector::{select_next, Candidate};
use crate::traits::{
    HostSurface, SwitchTarget, TargetId, TargetProvider, TriggerSource, TriggerToken,
};

/// Lifecycle of a navigation session.
///
/// Construction moves straight from uninitialized to `Active` (or to
/// `Terminated` when the provider has nothing to offer), so only these two
/// states are ever observable. `Terminated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Active,
    Terminated,
}

/// Per-target visual state exposed to the rendering collaborator.
///
/// Recomputed after every selection change; the core dictates only the
/// selected/not-selected split, never how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualState {
    pub id: TargetId,
    pub selected: bool,
}

/// One interactive navigation interaction, from open to termination.
pub struct SwitchSession {
    targets: Vec<Arc<dyn SwitchTarget>>,
    surface: Arc<dyn HostSurface>,
    trigger: Arc<dyn TriggerSource>,
    token: Option<TriggerToken>,
    selection: Option<TargetId>,
    lifecycle: Lifecycle,
    visual: Vec<VisualState>,
}

impl SwitchSession {
    /// Open a session against the given provider and trigger source.
    ///
    /// The provider is queried once here; target geometry is re-resolved on
    /// every directional command instead. With zero targets the session
    /// comes back already terminated and never subscribes to the trigger or
    /// activates anything.
    pub fn open(provider: &dyn TargetProvider, trigger: Arc<dyn TriggerSource>) -> Self {
        let targets = provider.targets();
        let surface = provider.surface();

        if targets.is_empty() {
            tracing::debug!("provider yielded no targets, session not started");
            return Self {
                targets,
                surface,
                trigger,
                token: None,
                selection: None,
                lifecycle: Lifecycle::Terminated,
                visual: Vec::new(),
            };
        }

        let selection = match provider.current_target().map(|t| t.id()) {
            Some(id) if targets.iter().any(|t| t.id() == id) => Some(id),
            Some(id) => {
                tracing::warn!(
                    target_id = %id,
                    "current target is not in the provider's target set, \
                     starting without a selection"
                );
                None
            }
            None => None,
        };

        let token = trigger.subscribe();

        let mut session = Self {
            targets,
            surface,
            trigger,
            token: Some(token),
            selection,
            lifecycle: Lifecycle::Active,
            visual: Vec::new(),
        };
        session.refresh_visual();
        tracing::debug!(
            targets = session.targets.len(),
            selection = ?session.selection,
            "switch session opened"
        );
        session
    }

    /// Move the selection in the given direction.
    ///
    /// A no-op after termination, and safe to call when no other target
    /// exists (the selection stays put).
    pub fn navigate(&mut self, direction: Direction) {
        if self.lifecycle == Lifecycle::Terminated {
            return;
        }

        // Layout may have shifted since the last command; rectangles are
        // resolved fresh on every query, never cached across commands.
        let candidates: Vec<Candidate> = self
            .targets
            .iter()
            .map(|t| Candidate::new(t.id(), t.rectangle(self.surface.as_ref())))
            .collect();

        if let Some(next) = select_next(&candidates, self.selection.as_ref(), direction) {
            tracing::debug!(?direction, from = ?self.selection, to = %next, "selection moved");
            self.selection = Some(next);
            self.refresh_visual();
        }
    }

    /// Commit to the current selection and end the session.
    ///
    /// Invokes the selected target's action if a selection exists. An
    /// activation failure is returned to the caller, but the session is
    /// fully terminated and its resources released either way.
    pub fn commit(&mut self) -> SwitchResult<()> {
        self.finish(true)
    }

    /// End the session because the external termination signal fired.
    ///
    /// Same observable behavior as [`Self::commit`]: the selection's action
    /// runs if one exists.
    pub fn terminate_from_trigger(&mut self) -> SwitchResult<()> {
        self.finish(true)
    }

    /// End the session without activating anything.
    pub fn cancel(&mut self) {
        // finish(false) cannot fail: no activation runs.
        let _ = self.finish(false);
    }

    /// The currently selected target, if any.
    pub fn current_selection(&self) -> Option<&TargetId> {
        self.selection.as_ref()
    }

    /// Whether the given target is the current selection.
    pub fn is_selected(&self, id: &TargetId) -> bool {
        self.selection.as_ref() == Some(id)
    }

    pub fn is_terminated(&self) -> bool {
        self.lifecycle == Lifecycle::Terminated
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Read-only visual-state table for the rendering collaborator.
    ///
    /// One entry per target while the session is active; empty once
    /// terminated.
    pub fn visual_states(&self) -> &[VisualState] {
        &self.visual
    }

    /// Terminate once: release resources unconditionally, then run the
    /// selected target's action when `invoke` is set. Idempotent - repeated
    /// calls after the first are no-ops, so `activate` runs at most once
    /// per session lifetime.
    fn finish(&mut self, invoke: bool) -> SwitchResult<()> {
        if self.lifecycle == Lifecycle::Terminated {
            return Ok(());
        }
        self.lifecycle = Lifecycle::Terminated;

        if let Some(token) = self.token.take() {
            self.trigger.unsubscribe(token);
        }
        self.visual.clear();

        if invoke {
            if let Some(id) = &self.selection {
                if let Some(target) = self.targets.iter().find(|t| &t.id() == id) {
                    tracing::debug!(target_id = %id, "activating selected target");
                    if let Err(err) = target.activate() {
                        tracing::warn!(target_id = %id, error = %err, "target activation failed");
                        return Err(err);
                    }
                }
            }
        }

        tracing::debug!(activated = invoke, "switch session terminated");
        Ok(())
    }

    fn refresh_visual(&mut self) {
        self.visual = self
            .targets
            .iter()
            .map(|t| {
                let id = t.id();
                let selected = self.selection.as_ref() == Some(&id);
                VisualState { id, selected }
            })
            .collect();
    }
}
