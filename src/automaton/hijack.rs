//! Transition hijacks: global rewrites of transition targets.

use crate::core::StateId;
use std::fmt;

type Selector<Id> = Box<dyn Fn(Option<&Id>) -> Option<Id>>;
type HijackAction<Id> = Box<dyn FnMut(Option<&Id>)>;

/// Interceptor that may rewrite the target of any transition.
///
/// The selector is a pure rewrite; returning the proposal unchanged means
/// "not interested". The optional action is notified with the rewritten
/// target when this hijack is the one applied.
///
/// # Example
///
/// ```rust
/// use pushdown::automaton::Hijack;
/// use pushdown::state_id;
///
/// state_id! {
///     enum Phase { Idle, Attack, Enraged }
/// }
///
/// // Every transition into Attack goes to Enraged instead.
/// let hijack = Hijack::new(|proposed: Option<&Phase>| match proposed {
///     Some(Phase::Attack) => Some(Phase::Enraged),
///     other => other.copied(),
/// });
/// assert_eq!(hijack.select(Some(&Phase::Attack)), Some(Phase::Enraged));
/// assert_eq!(hijack.select(Some(&Phase::Idle)), Some(Phase::Idle));
/// ```
pub struct Hijack<Id: StateId> {
    selector: Selector<Id>,
    action: Option<HijackAction<Id>>,
}

impl<Id: StateId> Hijack<Id> {
    pub fn new<F>(selector: F) -> Self
    where
        F: Fn(Option<&Id>) -> Option<Id> + 'static,
    {
        Self {
            selector: Box::new(selector),
            action: None,
        }
    }

    /// Attach the action notified with the rewritten target.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: FnMut(Option<&Id>) + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Apply the selector to a proposed target.
    pub fn select(&self, proposed: Option<&Id>) -> Option<Id> {
        (self.selector)(proposed)
    }

    fn notify(&mut self, target: Option<&Id>) {
        if let Some(action) = self.action.as_mut() {
            action(target);
        }
    }
}

impl<Id: StateId> fmt::Debug for Hijack<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hijack")
            .field("has_action", &self.action.is_some())
            .finish_non_exhaustive()
    }
}

/// Outcome of running a proposed target through the hijack list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<Id> {
    pub target: Option<Id>,
    /// Index of the hijack that rewrote the target, if any
    pub hijacked_by: Option<usize>,
}

/// Resolve a proposed target against `hijacks` in order.
///
/// The first hijack whose selector returns something different from
/// `proposed` wins; its action is notified and no further hijack is
/// consulted.
pub fn resolve_target<Id: StateId>(
    hijacks: &mut [Hijack<Id>],
    proposed: Option<Id>,
) -> Resolution<Id> {
    for (index, hijack) in hijacks.iter_mut().enumerate() {
        let rewritten = hijack.select(proposed.as_ref());
        if rewritten != proposed {
            tracing::trace!(
                target: "pushdown",
                from = ?proposed,
                to = ?rewritten,
                hijack = index,
                "transition target hijacked"
            );
            hijack.notify(rewritten.as_ref());
            return Resolution {
                target: rewritten,
                hijacked_by: Some(index),
            };
        }
    }

    Resolution {
        target: proposed,
        hijacked_by: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestId {
        X,
        Y,
        Z,
    }

    impl StateId for TestId {
        fn name(&self) -> &str {
            match self {
                Self::X => "X",
                Self::Y => "Y",
                Self::Z => "Z",
            }
        }
    }

    fn rewrite(from: TestId, to: TestId) -> Hijack<TestId> {
        Hijack::new(move |proposed: Option<&TestId>| match proposed {
            Some(id) if *id == from => Some(to),
            other => other.copied(),
        })
    }

    #[test]
    fn no_hijacks_keeps_proposal() {
        let resolution = resolve_target::<TestId>(&mut [], Some(TestId::X));
        assert_eq!(resolution.target, Some(TestId::X));
        assert_eq!(resolution.hijacked_by, None);
    }

    #[test]
    fn first_rewriting_hijack_wins() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = {
            let seen = Rc::clone(&seen);
            rewrite(TestId::X, TestId::Y).with_action(move |id| seen.borrow_mut().push(id.copied()))
        };
        let second = {
            let seen = Rc::clone(&seen);
            rewrite(TestId::X, TestId::Z).with_action(move |id| seen.borrow_mut().push(id.copied()))
        };
        let mut hijacks = vec![first, second];

        let resolution = resolve_target(&mut hijacks, Some(TestId::X));

        assert_eq!(resolution.target, Some(TestId::Y));
        assert_eq!(resolution.hijacked_by, Some(0));
        assert_eq!(*seen.borrow(), vec![Some(TestId::Y)]);
    }

    #[test]
    fn rewrite_is_not_iterated_to_a_fixpoint() {
        // X -> Y, then Y -> Z would apply if resolution were iterated.
        let mut hijacks = vec![rewrite(TestId::Y, TestId::Z), rewrite(TestId::X, TestId::Y)];

        let resolution = resolve_target(&mut hijacks, Some(TestId::X));

        assert_eq!(resolution.target, Some(TestId::Y));
        assert_eq!(resolution.hijacked_by, Some(1));
    }

    #[test]
    fn hijack_can_rewrite_a_pop_into_a_push() {
        let mut hijacks = vec![Hijack::new(|proposed: Option<&TestId>| match proposed {
            None => Some(TestId::Z),
            other => other.copied(),
        })];

        let resolution = resolve_target(&mut hijacks, None);
        assert_eq!(resolution.target, Some(TestId::Z));
    }

    #[test]
    fn hijack_can_rewrite_a_push_into_a_pop() {
        let mut hijacks = vec![Hijack::new(|_: Option<&TestId>| None)];

        let resolution = resolve_target(&mut hijacks, Some(TestId::X));
        assert_eq!(resolution.target, None);
        assert_eq!(resolution.hijacked_by, Some(0));
    }
}
