//! Builder for constructing transition descriptors.

use crate::automaton::{TransitionCallback, TransitionDescriptor};
use crate::builder::error::BuildError;
use crate::core::{Guard, StateId};

/// Builder for constructing transitions with a fluent API.
///
/// The target must be chosen explicitly with `.to(state)` or `.pop()`, and
/// a predicate is required. Transitions replace the current state unless
/// `.remember_previous()` is called.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::TransitionBuilder;
/// use pushdown::state_id;
///
/// state_id! {
///     enum Phase { Idle, Stunned }
/// }
///
/// let stun = TransitionBuilder::new()
///     .to(Phase::Stunned)
///     .remember_previous()
///     .when(|| true)
///     .build()
///     .unwrap();
/// assert_eq!(stun.target, Some(Phase::Stunned));
/// assert!(stun.remember_previous);
/// ```
pub struct TransitionBuilder<Id: StateId> {
    target: Option<Option<Id>>,
    remember_previous: bool,
    guard: Option<Guard>,
    callback: Option<TransitionCallback>,
}

impl<Id: StateId> TransitionBuilder<Id> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            target: None,
            remember_previous: false,
            guard: None,
            callback: None,
        }
    }

    /// Push `state` when the transition fires.
    pub fn to(mut self, state: Id) -> Self {
        self.target = Some(Some(state));
        self
    }

    /// Push nothing: the state beneath becomes current.
    pub fn pop(mut self) -> Self {
        self.target = Some(None);
        self
    }

    /// Keep the current state on the stack beneath the target.
    pub fn remember_previous(mut self) -> Self {
        self.remember_previous = true;
        self
    }

    /// Set the predicate from a prebuilt guard.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the predicate from a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the callback run once the transition is committed.
    pub fn then<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionDescriptor<Id>, BuildError> {
        let target = self.target.ok_or(BuildError::MissingTarget)?;
        let predicate = self.guard.ok_or(BuildError::MissingPredicate)?;

        Ok(TransitionDescriptor {
            target,
            remember_previous: self.remember_previous,
            predicate,
            callback: self.callback,
        })
    }
}

impl<Id: StateId> Default for TransitionBuilder<Id> {
    fn default() -> Self {
        Self::new()
    }
}
