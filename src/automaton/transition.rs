//! Transition descriptors.

use crate::core::{Guard, StateId};
use std::fmt;

/// Callback run once a transition has been committed.
pub type TransitionCallback = Box<dyn FnMut()>;

/// A conditional rule for leaving the state it is registered under.
///
/// - `target: None` pops without pushing, exposing whatever is beneath.
/// - `remember_previous: true` pushes on top of the current state instead
///   of replacing it.
pub struct TransitionDescriptor<Id: StateId> {
    pub target: Option<Id>,
    pub remember_previous: bool,
    pub predicate: Guard,
    pub callback: Option<TransitionCallback>,
}

impl<Id: StateId> TransitionDescriptor<Id> {
    pub fn new<F>(target: Option<Id>, remember_previous: bool, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self {
            target,
            remember_previous,
            predicate: Guard::new(predicate),
            callback: None,
        }
    }

    /// Attach the callback run after the transition-occurred notification.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Evaluate the predicate.
    pub fn can_fire(&self) -> bool {
        self.predicate.check()
    }

    /// Whether firing this transition pops the current state.
    pub fn discards_previous(&self) -> bool {
        !self.remember_previous
    }
}

impl<Id: StateId> fmt::Debug for TransitionDescriptor<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionDescriptor")
            .field("target", &self.target)
            .field("remember_previous", &self.remember_previous)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestId {
        Start,
        Middle,
    }

    impl StateId for TestId {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
            }
        }
    }

    #[test]
    fn can_fire_follows_predicate() {
        let flag = Rc::new(Cell::new(false));
        let transition = {
            let flag = Rc::clone(&flag);
            TransitionDescriptor::new(Some(TestId::Middle), false, move || flag.get())
        };

        assert!(!transition.can_fire());
        flag.set(true);
        assert!(transition.can_fire());
    }

    #[test]
    fn discards_previous_is_negation_of_remember() {
        let replace = TransitionDescriptor::new(Some(TestId::Start), false, || true);
        let push = TransitionDescriptor::new(Some(TestId::Start), true, || true);

        assert!(replace.discards_previous());
        assert!(!push.discards_previous());
    }

    #[test]
    fn callback_is_stored() {
        let calls = Rc::new(Cell::new(0));
        let mut transition = {
            let calls = Rc::clone(&calls);
            TransitionDescriptor::<TestId>::new(None, false, || true)
                .with_callback(move || calls.set(calls.get() + 1))
        };

        if let Some(callback) = transition.callback.as_mut() {
            callback();
        }
        assert_eq!(calls.get(), 1);
        assert!(format!("{transition:?}").contains("has_callback: true"));
    }
}
