//! Pushdown: a stack-based state machine engine
//!
//! Pushdown drives hierarchical behavior for entities whose logic splits
//! into named states with conditional transitions: boss phases, UI modes,
//! animation sequences. States live on a stack, so a state can be
//! interrupted by another and resumed when that one pops.
//!
//! # Core Concepts
//!
//! - **StateId**: small comparable token naming a state
//! - **State**: wrapper object pushed on the stack, reacts to being popped
//! - **Transitions**: ordered, predicate-guarded rules per source state
//! - **Hijacks**: global rewrites of transition targets
//! - **Events**: synchronous pop and transition notifications
//!
//! # Example
//!
//! ```rust
//! use pushdown::automaton::{PushdownAutomaton, TransitionDescriptor};
//! use pushdown::core::SimpleState;
//! use pushdown::state_id;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! state_id! {
//!     enum Phase { Patrol, Alert, Stunned }
//! }
//!
//! let mut machine: PushdownAutomaton<Phase> =
//!     PushdownAutomaton::new(Rc::new(SimpleState::new(Phase::Patrol)));
//! machine.register_state(Rc::new(SimpleState::new(Phase::Alert)));
//! machine.register_state(Rc::new(SimpleState::new(Phase::Stunned)));
//!
//! let stunned = Rc::new(Cell::new(false));
//!
//! // Stun interrupts patrol and remembers it underneath.
//! let hit = Rc::clone(&stunned);
//! machine.register_transition(
//!     Phase::Patrol,
//!     TransitionDescriptor::new(Some(Phase::Stunned), true, move || hit.get()),
//! );
//!
//! // Recovering pops back to whatever was interrupted.
//! let hit = Rc::clone(&stunned);
//! machine.register_transition(
//!     Phase::Stunned,
//!     TransitionDescriptor::new(None, false, move || !hit.get()),
//! );
//!
//! stunned.set(true);
//! machine.perform_behaviors();
//! machine.perform_state_transition_check().unwrap();
//! assert_eq!(machine.current_id(), Some(Phase::Stunned));
//! assert_eq!(machine.stack_depth(), 2);
//!
//! stunned.set(false);
//! machine.perform_state_transition_check().unwrap();
//! assert_eq!(machine.current_id(), Some(Phase::Patrol));
//! ```

pub mod automaton;
pub mod builder;
pub mod config;
pub mod core;
pub mod numeric;

// Re-export commonly used types
pub use automaton::{AutomatonError, Hijack, PushdownAutomaton, TransitionDescriptor};
pub use config::AutomatonConfig;
pub use core::{Guard, SimpleState, State, StateId};
