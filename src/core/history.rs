//! Transition history tracking.
//!
//! Records every transition the automaton applies, in order, when history
//! recording is enabled in the configuration.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use pushdown::core::TransitionRecord;
/// use pushdown::state_id;
/// use chrono::Utc;
///
/// state_id! {
///     enum Mode { Menu, Play }
/// }
///
/// let record = TransitionRecord {
///     from: Mode::Menu,
///     to: Some(Mode::Play),
///     discarded_previous: true,
///     hijacked: false,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, Some(Mode::Play));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<Id: StateId> {
    /// The state that was current when the transition fired
    pub from: Id,
    /// The state pushed, or `None` when the transition only popped
    pub to: Option<Id>,
    /// Whether the source state was popped before pushing
    pub discarded_previous: bool,
    /// Whether a hijack rewrote the target
    pub hijacked: bool,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions, optionally bounded.
///
/// When a limit is set, recording past it drops the oldest entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<Id: StateId> {
    transitions: VecDeque<TransitionRecord<Id>>,
    limit: Option<usize>,
}

impl<Id: StateId> Default for TransitionHistory<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: StateId> TransitionHistory<Id> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history holding at most `limit` records.
    ///
    /// Storage grows as records arrive; nothing is reserved for the limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Append a record, evicting the oldest one if the limit is reached.
    pub fn record(&mut self, transition: TransitionRecord<Id>) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the `from` of the oldest record, followed by the `to` of
    /// every record. Pop-only transitions contribute `None`.
    pub fn get_path(&self) -> Vec<Option<&Id>> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(Some(&first.from));
        }
        for transition in &self.transitions {
            path.push(transition.to.as_ref());
        }
        path
    }

    /// Duration between the oldest and newest record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over the records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionRecord<Id>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord<Id>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestId {
        Idle,
        Windup,
        Slam,
    }

    impl StateId for TestId {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Windup => "Windup",
                Self::Slam => "Slam",
            }
        }
    }

    fn record(from: TestId, to: Option<TestId>) -> TransitionRecord<TestId> {
        TransitionRecord {
            from,
            to,
            discarded_previous: true,
            hijacked: false,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: TransitionHistory<TestId> = TransitionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_adds_transition() {
        let mut history = TransitionHistory::new();
        history.record(record(TestId::Idle, Some(TestId::Windup)));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, Some(TestId::Windup));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = TransitionHistory::new();
        history.record(record(TestId::Idle, Some(TestId::Windup)));
        history.record(record(TestId::Windup, Some(TestId::Slam)));
        history.record(record(TestId::Slam, None));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                Some(&TestId::Idle),
                Some(&TestId::Windup),
                Some(&TestId::Slam),
                None
            ]
        );
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut history = TransitionHistory::with_limit(2);
        history.record(record(TestId::Idle, Some(TestId::Windup)));
        history.record(record(TestId::Windup, Some(TestId::Slam)));
        history.record(record(TestId::Slam, Some(TestId::Idle)));

        assert_eq!(history.len(), 2);
        assert_eq!(history.limit(), Some(2));
        let froms: Vec<_> = history.transitions().map(|t| t.from).collect();
        assert_eq!(froms, vec![TestId::Windup, TestId::Slam]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = TransitionHistory::new();
        history.record(record(TestId::Idle, Some(TestId::Windup)));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.record(record(TestId::Windup, Some(TestId::Slam)));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn huge_limit_does_not_reserve_storage() {
        let mut history = TransitionHistory::with_limit(usize::MAX);
        history.record(record(TestId::Idle, Some(TestId::Windup)));

        assert_eq!(history.len(), 1);
        assert_eq!(history.limit(), Some(usize::MAX));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = TransitionHistory::new();
        history.record(record(TestId::Idle, Some(TestId::Windup)));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = TransitionHistory::new();
        history.record(record(TestId::Idle, Some(TestId::Windup)));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory<TestId> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(history.last(), deserialized.last());
    }
}
