//! Error handling for the switcher engine.
//!
//! The taxonomy is deliberately narrow: the selector is total over any
//! non-empty target set and lifecycle transitions never fail. An empty
//! target set at open is reported as a session that never started, and a
//! provider handing back a focused target outside its own target set is
//! downgraded to "no current selection". The only runtime failure that
//! reaches callers is a target action refusing to run, surfaced as
//! [`SwitchError::Activation`] from `commit`/`terminate_from_trigger`.

mod result;
mod switch_error;

pub use result::SwitchResult;
pub use switch_error::SwitchError;
