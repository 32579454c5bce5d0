//! Automaton error types.

use thiserror::Error;

/// Errors raised by the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A transition resolved to an identifier with no registered wrapper
    #[error("No state registered for '{state}'")]
    UnregisteredState { state: String },

    /// Transitions exist for a source identifier that has no registered wrapper
    #[error("Transitions registered from '{state}' but no state is registered for it")]
    UnregisteredSource { state: String },
}
