//! Consistency check of the registry against the transition table.
//!
//! Uses Stillwater's `Validation` so every problem is reported in one pass
//! instead of stopping at the first.

use crate::automaton::error::AutomatonError;
use crate::automaton::machine::PushdownAutomaton;
use crate::core::{State, StateId};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

impl<Id: StateId, W: State<Id> + ?Sized> PushdownAutomaton<Id, W> {
    /// Check that every transition source and target has a registered
    /// wrapper.
    ///
    /// Hijacks are opaque functions and are not inspected, so a hijack that
    /// rewrites to an unregistered identifier still fails at run time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pushdown::automaton::{AutomatonError, PushdownAutomaton, TransitionDescriptor};
    /// use pushdown::core::SimpleState;
    /// use pushdown::state_id;
    /// use std::rc::Rc;
    /// use stillwater::validation::Validation;
    ///
    /// state_id! {
    ///     enum Mode { Menu, Play, Pause }
    /// }
    ///
    /// let mut machine: PushdownAutomaton<Mode, SimpleState<Mode>> =
    ///     PushdownAutomaton::new(Rc::new(SimpleState::new(Mode::Menu)));
    /// machine.register_transition(
    ///     Mode::Menu,
    ///     TransitionDescriptor::new(Some(Mode::Play), false, || false),
    /// );
    ///
    /// match machine.validate() {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 1),
    ///     Validation::Success(_) => panic!("Play is not registered"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<AutomatonError>> {
        let registered: HashSet<&Id> = self.registry_ids().collect();
        let mut checks: Vec<Validation<(), NonEmptyVec<AutomatonError>>> = Vec::new();
        let mut reported: HashSet<&Id> = HashSet::new();

        for (source, candidates) in self.transition_table() {
            if !registered.contains(source) {
                checks.push(Validation::fail(AutomatonError::UnregisteredSource {
                    state: source.name().to_string(),
                }));
            }

            for target in candidates.iter().filter_map(|t| t.target.as_ref()) {
                if !registered.contains(target) && reported.insert(target) {
                    checks.push(Validation::fail(AutomatonError::UnregisteredState {
                        state: target.name().to_string(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
