//! Panehop - a spatial switcher engine for keyboard-driven navigation.
//!
//! Given a set of on-screen activatable targets with rectangular regions,
//! this crate moves a selection among them with Up/Down/Left/Right commands
//! and commits to one target to trigger its action. It is the engine behind
//! a keyboard-driven switcher overlay: the host supplies targets through a
//! provider, feeds directional commands into a [`session::SwitchSession`],
//! and tears the session down when the user commits or the termination
//! trigger fires.
//!
//! Rendering of the highlight frames and discovery of the targets themselves
//! stay with the host; the crate ships a ratatui overlay widget and a
//! crossterm held-modifier trigger as optional collaborators.

pub mod adapters;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod selector;
pub mod session;
pub mod traits;

pub use error::{SwitchError, SwitchResult};
pub use geometry::{Direction, Point, Rect};
pub use selector::{select_next, Candidate};
pub use session::{Lifecycle, SwitchSession, VisualState};
pub use traits::{
    HostSurface, SwitchTarget, TargetId, TargetProvider, TriggerSource, TriggerToken,
};
