//! Machine construction settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the rule table treats a second rule keyed on an existing
/// (state, operand) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the build, whatever guards the rules carry.
    #[default]
    Reject,

    /// Keep every rule; dispatch tries them in registration order and the
    /// first one whose guard passes fires.
    Ordered,
}

/// Settings applied when building a machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfsmConfig {
    pub duplicates: DuplicatePolicy,
}

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EfsmConfig {
    /// Configuration allowing guarded alternatives on one (state, operand).
    pub fn ordered() -> Self {
        Self {
            duplicates: DuplicatePolicy::Ordered,
        }
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use efsm::config::{DuplicatePolicy, EfsmConfig};
    ///
    /// let config = EfsmConfig::from_json(r#"{ "duplicates": "ordered" }"#).unwrap();
    /// assert_eq!(config.duplicates, DuplicatePolicy::Ordered);
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
