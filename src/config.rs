//! Automaton configuration.
//!
//! Configuration is plain serde data so hosts can keep it next to the rest
//! of their settings and load it from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for `AutomatonConfig`
    #[error("Failed to parse automaton config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A history limit of zero would silently discard every record
    #[error("history_limit must be at least 1 when set")]
    ZeroHistoryLimit,
}

/// Settings for a `PushdownAutomaton`.
///
/// # Example
///
/// ```rust
/// use pushdown::config::AutomatonConfig;
///
/// let config = AutomatonConfig::from_json(r#"{ "name": "boss", "record_history": true }"#)
///     .unwrap();
/// assert_eq!(config.name, "boss");
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    /// Label attached to log events
    pub name: String,
    /// Record every applied transition in the automaton's history
    pub record_history: bool,
    /// Keep at most this many history records
    pub history_limit: Option<usize>,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            name: "automaton".to_string(),
            record_history: false,
            history_limit: None,
        }
    }
}

impl AutomatonConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Enable history recording, optionally bounded.
    pub fn with_history(mut self, limit: Option<usize>) -> Self {
        self.record_history = true;
        self.history_limit = limit;
        self
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == Some(0) {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config = AutomatonConfig::from_json("{}").unwrap();
        assert_eq!(config, AutomatonConfig::default());
        assert_eq!(config.name, "automaton");
        assert!(!config.record_history);
    }

    #[test]
    fn history_limit_is_parsed() {
        let config =
            AutomatonConfig::from_json(r#"{ "record_history": true, "history_limit": 16 }"#)
                .unwrap();
        assert_eq!(config.history_limit, Some(16));
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let result = AutomatonConfig::from_json(r#"{ "history_limit": 0 }"#);
        assert!(matches!(result, Err(ConfigError::ZeroHistoryLimit)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = AutomatonConfig::from_json("{ name: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn builder_helpers() {
        let config = AutomatonConfig::named("ui").with_history(Some(4));
        assert_eq!(config.name, "ui");
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(4));
        assert!(config.validate().is_ok());
    }
}
