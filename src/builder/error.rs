//! Rule definition errors raised while building a machine.

use thiserror::Error;

/// Errors that make a rule illegal to add to a rule table.
///
/// States and operands are recorded in their `Debug` form so the error
/// stays independent of the machine's type parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Illegal rule definition: invalid state {state}: {reason}")]
    InvalidState { state: String, reason: String },

    #[error("Illegal rule definition: no transition function for rule from {from} on {operand}")]
    MissingTransition { from: String, operand: String },

    #[error("Illegal rule definition: duplicated rule from {from} on {operand}")]
    DuplicateRule { from: String, operand: String },
}

impl DefinitionError {
    pub(crate) fn invalid_state(state: &impl std::fmt::Debug, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            state: format!("{state:?}"),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_transition(
        from: &impl std::fmt::Debug,
        operand: &impl std::fmt::Debug,
    ) -> Self {
        Self::MissingTransition {
            from: format!("{from:?}"),
            operand: format!("{operand:?}"),
        }
    }

    pub(crate) fn duplicate_rule(
        from: &impl std::fmt::Debug,
        operand: &impl std::fmt::Debug,
    ) -> Self {
        Self::DuplicateRule {
            from: format!("{from:?}"),
            operand: format!("{operand:?}"),
        }
    }
}
