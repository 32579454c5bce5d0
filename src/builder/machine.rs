//! Builder for constructing automata.

use crate::automaton::{Behavior, Hijack, PushdownAutomaton, TransitionDescriptor};
use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::config::AutomatonConfig;
use crate::core::{State, StateId};
use std::rc::Rc;

/// Builder for constructing automata with a fluent API.
///
/// Registrations are replayed in the order they were added, so transition
/// priority and hijack order are preserved.
pub struct AutomatonBuilder<Id: StateId, W: State<Id> + ?Sized = dyn State<Id>> {
    initial: Option<Rc<W>>,
    states: Vec<Rc<W>>,
    behaviors: Vec<(Id, Behavior)>,
    transitions: Vec<(Id, TransitionDescriptor<Id>)>,
    hijacks: Vec<Hijack<Id>>,
    config: AutomatonConfig,
}

impl<Id: StateId, W: State<Id> + ?Sized> AutomatonBuilder<Id, W> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            behaviors: Vec::new(),
            transitions: Vec::new(),
            hijacks: Vec::new(),
            config: AutomatonConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: Rc<W>) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register an additional state.
    pub fn state(mut self, state: Rc<W>) -> Self {
        self.states.push(state);
        self
    }

    /// Bind a per-tick behavior.
    pub fn behavior<F>(mut self, id: Id, behavior: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.behaviors.push((id, Box::new(behavior)));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        source: Id,
        builder: TransitionBuilder<Id>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push((source, transition));
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, source: Id, transition: TransitionDescriptor<Id>) -> Self {
        self.transitions.push((source, transition));
        self
    }

    pub fn hijack(mut self, hijack: Hijack<Id>) -> Self {
        self.hijacks.push(hijack);
        self
    }

    pub fn config(mut self, config: AutomatonConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing or the config is invalid.
    pub fn build(self) -> Result<PushdownAutomaton<Id, W>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        self.config.validate()?;

        let mut machine = PushdownAutomaton::with_config(initial, self.config);
        for state in self.states {
            machine.register_state(state);
        }
        for (id, behavior) in self.behaviors {
            machine.register_state_behavior(id, behavior);
        }
        for (source, transition) in self.transitions {
            machine.register_transition(source, transition);
        }
        for hijack in self.hijacks {
            machine.add_transition_hijack(hijack);
        }

        Ok(machine)
    }
}

impl<Id: StateId, W: State<Id> + ?Sized> Default for AutomatonBuilder<Id, W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleState;
    use serde::{Deserialize, Serialize};
    use std::cell::Cell;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestId {
        Initial,
        Processing,
        Complete,
    }

    impl StateId for TestId {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    fn state(id: TestId) -> Rc<SimpleState<TestId>> {
        Rc::new(SimpleState::new(id))
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = AutomatonBuilder::<TestId, SimpleState<TestId>>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let config = AutomatonConfig {
            history_limit: Some(0),
            ..AutomatonConfig::default()
        };
        let result = AutomatonBuilder::new()
            .initial(state(TestId::Initial))
            .config(config)
            .build();

        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn builder_propagates_transition_errors() {
        let result = AutomatonBuilder::new()
            .initial(state(TestId::Initial))
            .transition(TestId::Initial, TransitionBuilder::new().to(TestId::Processing));

        assert!(matches!(result, Err(BuildError::MissingPredicate)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);

        let mut machine = AutomatonBuilder::new()
            .initial(state(TestId::Initial))
            .state(state(TestId::Processing))
            .state(state(TestId::Complete))
            .behavior(TestId::Processing, move || counter.set(counter.get() + 1))
            .transition(
                TestId::Initial,
                TransitionBuilder::new().to(TestId::Processing).when(|| true),
            )
            .unwrap()
            .add_transition(
                TestId::Processing,
                TransitionDescriptor::new(Some(TestId::Complete), false, || false),
            )
            .config(AutomatonConfig::named("builder"))
            .build()
            .unwrap();

        assert_eq!(machine.current_id(), Some(TestId::Initial));
        assert_eq!(machine.registered_count(), 3);
        assert_eq!(machine.config().name, "builder");

        assert_eq!(machine.perform_state_transition_check(), Ok(1));
        assert!(machine.perform_behaviors());
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn builder_registers_hijacks_in_order() {
        let machine = AutomatonBuilder::new()
            .initial(state(TestId::Initial))
            .hijack(Hijack::new(|proposed: Option<&TestId>| proposed.copied()))
            .hijack(Hijack::new(|_: Option<&TestId>| None))
            .build()
            .unwrap();

        assert_eq!(machine.hijack_count(), 2);
    }
}
