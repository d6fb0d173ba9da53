//! Trait abstractions for the session's external collaborators.
//!
//! The session core never talks to a concrete UI toolkit. Everything it
//! needs from the host is expressed as a trait, enabling dependency
//! injection, mocking, and better testability:
//!
//! - [`TargetProvider`] - supplies the target set and the focused target
//! - [`SwitchTarget`] - identity, geometry, and action of one target
//! - [`HostSurface`] - handle to the surface owning target coordinates
//! - [`TriggerSource`] - the external signal that ends the interaction

pub mod provider;
pub mod target;
pub mod trigger;

pub use provider::TargetProvider;
pub use target::{HostSurface, SwitchTarget, TargetId};
pub use trigger::{TriggerSource, TriggerToken};
