//! Build errors for automaton and transition builders.

use thiserror::Error;

/// Errors that can occur when building automata and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition predicate not specified. Call .when(predicate) or .guard(guard)")]
    MissingPredicate,

    #[error("Transition target not specified. Call .to(state) or .pop()")]
    MissingTarget,

    #[error(transparent)]
    InvalidConfig(#[from] crate::config::ConfigError),
}
