//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders and a macro for creating automata
//! with minimal boilerplate while keeping registration order explicit.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::AutomatonBuilder;
pub use transition::TransitionBuilder;

use crate::automaton::TransitionDescriptor;
use crate::core::StateId;

/// Transition that replaces the current state with `target` unconditionally.
///
/// Only useful for states meant to be left the moment they are entered;
/// combined with a path back to the source it never terminates.
///
/// # Example
///
/// ```
/// use pushdown::builder::always;
/// use pushdown::state_id;
///
/// state_id! {
///     enum Step { Intro, Main }
/// }
///
/// let transition = always(Step::Main);
/// assert!(transition.can_fire());
/// ```
pub fn always<Id: StateId>(target: Id) -> TransitionDescriptor<Id> {
    TransitionDescriptor::new(Some(target), false, || true)
}

/// Transition that pops the current state when `predicate` holds.
pub fn pop_when<Id, F>(predicate: F) -> TransitionDescriptor<Id>
where
    Id: StateId,
    F: Fn() -> bool + 'static,
{
    TransitionDescriptor::new(None, false, predicate)
}
