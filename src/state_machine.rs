//! Submission state machine
//!
//! Pure transitions in the Elm style: `transition` maps a state and an event
//! to a new state plus effects, and the session executes the effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{Phase, Role, SessionState, Turn};
pub use transition::{transition, TransitionError, TransitionResult, ERROR_TURN_TEXT};
