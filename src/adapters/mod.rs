//! Concrete collaborator implementations.
//!
//! - [`modifier`] - crossterm-backed held-modifier trigger and arrow-key
//!   mapping for TUI hosts
//! - [`mock`] - in-memory collaborators for tests

pub mod mock;
pub mod modifier;

pub use modifier::{direction_for_key, HeldModifierTrigger};
