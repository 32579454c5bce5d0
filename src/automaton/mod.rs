//! The pushdown automaton and its parts.
//!
//! # Key Concepts
//!
//! - **Stack**: the top wrapper is the current state; only its behavior
//!   runs and only its transitions are evaluated
//! - **Transitions**: ordered per source state; the first one whose
//!   predicate holds fires
//! - **Hijacks**: global rewrites of a transition's target, first match wins
//! - **Events**: synchronous notification lists for pops and transitions
//!
//! # Per-tick usage
//!
//! Hosts call `perform_behaviors()` and then
//! `perform_state_transition_check()` once per update. The latter may apply
//! several transitions in a row when each newly entered state can leave
//! immediately.

mod error;
mod events;
mod hijack;
mod machine;
mod transition;
mod validate;

pub use error::AutomatonError;
pub use events::{Event, SubscriptionId};
pub use hijack::{resolve_target, Hijack, Resolution};
pub use machine::{Behavior, PushdownAutomaton};
pub use transition::{TransitionCallback, TransitionDescriptor};
