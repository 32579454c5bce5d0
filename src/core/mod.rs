//! Core state machine types.
//!
//! This module contains the building blocks the automaton is made of:
//! - State identifiers and wrappers via the `StateId` and `State` traits
//! - Guard predicates for transition control
//! - Transition history tracking

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{TransitionHistory, TransitionRecord};
pub use state::{SimpleState, State, StateId};
