//! Mock implementations for testing.
//!
//! This module provides mock implementations of all collaborator traits,
//! enabling session and selector tests without a real UI host.
//!
//! # Available Mocks
//!
//! - [`MockTarget`] - target with adjustable geometry and an activation counter
//! - [`MockProvider`] - provider over a fixed target list
//! - [`MockTrigger`] - trigger source that counts subscriptions
//! - [`MockSurface`] - placeholder host surface

pub mod provider;
pub mod target;
pub mod trigger;

pub use provider::MockProvider;
pub use target::{MockSurface, MockTarget};
pub use trigger::MockTrigger;
