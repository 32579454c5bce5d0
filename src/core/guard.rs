//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean functions. They read whatever host
//! state they captured and decide whether a transition should fire.

use std::fmt;

/// Predicate that determines if a transition fires.
///
/// Guards should be side-effect free: the automaton evaluates them in
/// registration order and stops at the first one that returns `true`, so
/// later guards may not run at all.
///
/// # Example
///
/// ```rust
/// use pushdown::core::Guard;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let health = Rc::new(Cell::new(100));
/// let low_health = {
///     let health = Rc::clone(&health);
///     Guard::new(move || health.get() < 30)
/// };
///
/// assert!(!low_health.check());
/// health.set(10);
/// assert!(low_health.check());
/// ```
pub struct Guard {
    predicate: Box<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that always allows the transition.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Guard that never allows the transition.
    pub fn never() -> Self {
        Self::new(|| false)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn guard_reads_captured_state() {
        let counter = Rc::new(Cell::new(0));
        let guard = {
            let counter = Rc::clone(&counter);
            Guard::new(move || counter.get() >= 1)
        };

        assert!(!guard.check());
        counter.set(1);
        assert!(guard.check());
    }

    #[test]
    fn always_and_never() {
        assert!(Guard::always().check());
        assert!(!Guard::never().check());
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|| 2 + 2 == 4);

        let result1 = guard.check();
        let result2 = guard.check();

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let a = Rc::new(Cell::new(3));
        let b = Rc::new(Cell::new(false));
        let guard = {
            let (a, b) = (Rc::clone(&a), Rc::clone(&b));
            Guard::new(move || a.get() > 2 && !b.get())
        };

        assert!(guard.check());
        b.set(true);
        assert!(!guard.check());
    }
}
