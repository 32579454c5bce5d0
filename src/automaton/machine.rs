//! The pushdown automaton.

use crate::automaton::error::AutomatonError;
use crate::automaton::events::{Event, SubscriptionId};
use crate::automaton::hijack::{resolve_target, Hijack};
use crate::automaton::transition::TransitionDescriptor;
use crate::config::AutomatonConfig;
use crate::core::{State, StateId, TransitionHistory, TransitionRecord};
use chrono::Utc;
use std::collections::HashMap;
use std::rc::Rc;

/// Recurring action bound to a state.
pub type Behavior = Box<dyn FnMut()>;

/// Stack-based state machine.
///
/// Owns a stack of state wrappers (the top is the current state), a
/// registry of wrappers by identifier, an ordered transition table, a
/// behavior table and a list of hijacks.
///
/// `W` defaults to `dyn State<Id>` so wrappers of different concrete types
/// can share one automaton.
///
/// # Cascades
///
/// `perform_state_transition_check` keeps applying transitions until the
/// current state has none that can fire. There is no cycle detection: a
/// transition whose predicate is still true right after it fired, in a
/// graph that leads back to its source, loops forever. Predicates must
/// become false once their transition's effects have been applied.
///
/// # Example
///
/// ```rust
/// use pushdown::automaton::{PushdownAutomaton, TransitionDescriptor};
/// use pushdown::core::SimpleState;
/// use pushdown::state_id;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// state_id! {
///     enum Phase { Idle, Attack }
/// }
///
/// let mut machine: PushdownAutomaton<Phase, SimpleState<Phase>> =
///     PushdownAutomaton::new(Rc::new(SimpleState::new(Phase::Idle)));
/// machine.register_state(Rc::new(SimpleState::new(Phase::Attack)));
///
/// let player_close = Rc::new(Cell::new(false));
/// let close = Rc::clone(&player_close);
/// machine.register_transition(
///     Phase::Idle,
///     TransitionDescriptor::new(Some(Phase::Attack), false, move || close.get()),
/// );
///
/// assert_eq!(machine.perform_state_transition_check().unwrap(), 0);
/// player_close.set(true);
/// assert_eq!(machine.perform_state_transition_check().unwrap(), 1);
/// assert_eq!(machine.current_id(), Some(Phase::Attack));
/// ```
pub struct PushdownAutomaton<Id: StateId, W: State<Id> + ?Sized = dyn State<Id>> {
    stack: Vec<Rc<W>>,
    registry: HashMap<Id, Rc<W>>,
    transitions: HashMap<Id, Vec<TransitionDescriptor<Id>>>,
    behaviors: HashMap<Id, Behavior>,
    hijacks: Vec<Hijack<Id>>,
    state_popped: Event<W>,
    state_transitioned: Event<bool>,
    history: TransitionHistory<Id>,
    config: AutomatonConfig,
}

impl<Id: StateId, W: State<Id> + ?Sized> PushdownAutomaton<Id, W> {
    /// Create an automaton with `initial` pushed and registered.
    pub fn new(initial: Rc<W>) -> Self {
        Self::with_config(initial, AutomatonConfig::default())
    }

    pub fn with_config(initial: Rc<W>, config: AutomatonConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => TransitionHistory::with_limit(limit),
            None => TransitionHistory::new(),
        };

        let mut registry = HashMap::new();
        registry.insert(initial.id(), Rc::clone(&initial));

        Self {
            stack: vec![initial],
            registry,
            transitions: HashMap::new(),
            behaviors: HashMap::new(),
            hijacks: Vec::new(),
            state_popped: Event::new(),
            state_transitioned: Event::new(),
            history,
            config,
        }
    }

    /// Register (or replace) the wrapper for its identifier.
    ///
    /// Wrappers already on the stack are not affected.
    pub fn register_state(&mut self, wrapper: Rc<W>) {
        self.registry.insert(wrapper.id(), wrapper);
    }

    /// Bind the per-tick behavior of a state. Last registration wins.
    pub fn register_state_behavior<F>(&mut self, id: Id, behavior: F)
    where
        F: FnMut() + 'static,
    {
        self.behaviors.insert(id, Box::new(behavior));
    }

    /// Append a transition out of `source`. Registration order is priority.
    pub fn register_transition(&mut self, source: Id, transition: TransitionDescriptor<Id>) {
        self.transitions.entry(source).or_default().push(transition);
    }

    /// Append a hijack consulted for every transition.
    pub fn add_transition_hijack(&mut self, hijack: Hijack<Id>) {
        self.hijacks.push(hijack);
    }

    /// Subscribe to pops. Listeners receive the popped wrapper.
    pub fn on_state_pop<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&W) + 'static,
    {
        self.state_popped.subscribe(listener)
    }

    /// Subscribe to applied transitions. Listeners receive whether the
    /// previous state was discarded.
    pub fn on_state_transition<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&bool) + 'static,
    {
        self.state_transitioned.subscribe(listener)
    }

    pub fn unsubscribe_state_pop(&mut self, id: SubscriptionId) -> bool {
        self.state_popped.unsubscribe(id)
    }

    pub fn unsubscribe_state_transition(&mut self, id: SubscriptionId) -> bool {
        self.state_transitioned.unsubscribe(id)
    }

    /// Run the current state's behavior.
    ///
    /// Returns `false` when the stack is empty or the current state has no
    /// behavior.
    pub fn perform_behaviors(&mut self) -> bool {
        let Some(current) = self.current_id() else {
            return false;
        };

        match self.behaviors.get_mut(&current) {
            Some(behavior) => {
                tracing::trace!(
                    target: "pushdown",
                    automaton = %self.config.name,
                    state = current.name(),
                    "performing state behavior"
                );
                behavior();
                true
            }
            None => false,
        }
    }

    /// Apply transitions until the current state has none that can fire.
    ///
    /// Returns how many transitions were applied. Fails with
    /// `AutomatonError::UnregisteredState` as soon as a transition resolves
    /// to an identifier with no registered wrapper; a pop already performed
    /// for that transition is not undone.
    pub fn perform_state_transition_check(&mut self) -> Result<usize, AutomatonError> {
        let mut applied = 0;

        while let Some((source, index)) = self.select_transition() {
            self.apply_transition(source, index)?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Apply a transition that is not in the table.
    ///
    /// Pops (unless `remember_previous`), resolves hijacks, pushes and
    /// notifies exactly like a table transition, but does not cascade.
    /// With an empty stack the pop is skipped.
    pub fn force_transition(
        &mut self,
        target: Option<Id>,
        remember_previous: bool,
    ) -> Result<(), AutomatonError> {
        let source = self.current_id();
        self.shift(source, target, remember_previous)
    }

    /// First transition out of the current state whose predicate holds.
    fn select_transition(&self) -> Option<(Id, usize)> {
        let current = self.current_id()?;
        let candidates = self.transitions.get(&current)?;
        let index = candidates
            .iter()
            .position(TransitionDescriptor::can_fire)?;
        Some((current, index))
    }

    fn apply_transition(&mut self, source: Id, index: usize) -> Result<(), AutomatonError> {
        let (target, remember_previous) = match self
            .transitions
            .get(&source)
            .and_then(|candidates| candidates.get(index))
        {
            Some(transition) => (transition.target.clone(), transition.remember_previous),
            None => return Ok(()),
        };

        self.shift(Some(source.clone()), target, remember_previous)?;

        // Runs after the transition notification so listeners can reset
        // machine-wide state the callback depends on.
        if let Some(callback) = self
            .transitions
            .get_mut(&source)
            .and_then(|candidates| candidates.get_mut(index))
            .and_then(|transition| transition.callback.as_mut())
        {
            callback();
        }

        Ok(())
    }

    /// Pop, resolve, push and notify.
    fn shift(
        &mut self,
        source: Option<Id>,
        target: Option<Id>,
        remember_previous: bool,
    ) -> Result<(), AutomatonError> {
        if !remember_previous {
            if let Some(popped) = self.stack.pop() {
                let popped_id = popped.id();
                tracing::debug!(
                    target: "pushdown",
                    automaton = %self.config.name,
                    state = popped_id.name(),
                    "state popped"
                );
                self.state_popped.emit(&popped);
                popped.on_popped();
            }
        }

        let resolution = resolve_target(&mut self.hijacks, target);

        if let Some(id) = &resolution.target {
            let Some(wrapper) = self.registry.get(id) else {
                tracing::warn!(
                    target: "pushdown",
                    automaton = %self.config.name,
                    state = id.name(),
                    "transition target is not registered"
                );
                return Err(AutomatonError::UnregisteredState {
                    state: id.name().to_string(),
                });
            };
            self.stack.push(Rc::clone(wrapper));
        }

        tracing::debug!(
            target: "pushdown",
            automaton = %self.config.name,
            from = ?source,
            to = ?resolution.target,
            remember_previous,
            hijacked = resolution.hijacked_by.is_some(),
            depth = self.stack.len(),
            "transition applied"
        );

        self.state_transitioned.emit(&!remember_previous);

        if self.config.record_history {
            if let Some(from) = source {
                self.history.record(TransitionRecord {
                    from,
                    to: resolution.target,
                    discarded_previous: !remember_previous,
                    hijacked: resolution.hijacked_by.is_some(),
                    timestamp: Utc::now(),
                });
            }
        }

        Ok(())
    }

    /// The wrapper on top of the stack.
    pub fn current_state(&self) -> Option<&Rc<W>> {
        self.stack.last()
    }

    pub fn current_id(&self) -> Option<Id> {
        self.stack.last().map(|state| state.id())
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// The stack, bottom first.
    pub fn stack(&self) -> &[Rc<W>] {
        &self.stack
    }

    /// Identifiers on the stack, bottom first.
    pub fn stack_ids(&self) -> Vec<Id> {
        self.stack.iter().map(|state| state.id()).collect()
    }

    pub fn registered(&self, id: &Id) -> Option<&Rc<W>> {
        self.registry.get(id)
    }

    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }

    pub fn transitions_from(&self, id: &Id) -> &[TransitionDescriptor<Id>] {
        self.transitions
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_behavior(&self, id: &Id) -> bool {
        self.behaviors.contains_key(id)
    }

    pub fn hijack_count(&self) -> usize {
        self.hijacks.len()
    }

    pub fn history(&self) -> &TransitionHistory<Id> {
        &self.history
    }

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    pub(crate) fn registry_ids(&self) -> impl Iterator<Item = &Id> {
        self.registry.keys()
    }

    pub(crate) fn transition_table(
        &self,
    ) -> impl Iterator<Item = (&Id, &Vec<TransitionDescriptor<Id>>)> {
        self.transitions.iter()
    }
}
