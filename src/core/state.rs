//! Identifier and wrapper traits for automaton states.
//!
//! A state is split in two: the *identifier* is a small comparable token
//! naming the state, and the *wrapper* is the concrete object that sits on
//! the automaton's stack and reacts to being popped.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// Identifiers are opaque to the automaton: it only compares them, hashes
/// them as table keys and prints their name in logs.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: identifiers key the registry and tables
/// - `Debug`: identifiers are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: identifiers appear in transition history
///
/// # Example
///
/// ```rust
/// use pushdown::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Attack,
/// }
///
/// impl StateId for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Attack => "Attack",
///         }
///     }
/// }
///
/// assert_eq!(Phase::Attack.name(), "Attack");
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + 'static
{
    /// Get the identifier's name for display/logging.
    fn name(&self) -> &str;
}

/// Capability of a state wrapper: report an identifier, react to a pop.
///
/// Wrappers are held behind `Rc` so the code that built them can keep a
/// handle. `on_popped` therefore takes `&self`; wrappers that need to
/// mutate on pop use interior mutability.
pub trait State<Id: StateId> {
    /// The identifier this wrapper is registered under.
    fn id(&self) -> Id;

    /// Called right after the wrapper has been popped off the stack and the
    /// state-popped listeners have run.
    ///
    /// Default implementation does nothing.
    fn on_popped(&self) {}
}

/// Wrapper that carries nothing but its identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleState<Id: StateId>(pub Id);

impl<Id: StateId> SimpleState<Id> {
    pub fn new(id: Id) -> Self {
        Self(id)
    }
}

impl<Id: StateId> State<Id> for SimpleState<Id> {
    fn id(&self) -> Id {
        self.0.clone()
    }
}
