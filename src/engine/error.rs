//! Dispatch-time errors.

use crate::core::{BoxError, TransitionFailure};
use std::fmt;
use thiserror::Error;

/// Why no rule fired for a (state, operand) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalTransitReason {
    /// No rule is keyed on the pair.
    NoMatchingRule,

    /// At least one rule is keyed on the pair, but every guard refused.
    GuardFailed,
}

impl fmt::Display for IllegalTransitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoMatchingRule => "no matching rule",
            Self::GuardFailed => "guard failed",
        })
    }
}

/// Errors returned by `transit`.
///
/// Every variant carries the state handed back to the caller; see
/// [`TransitError::state`].
#[derive(Debug, Error)]
pub enum TransitError<S, O> {
    #[error("Illegal transit from {from:?} on {operand:?}: {reason}")]
    IllegalTransit {
        from: S,
        operand: O,
        reason: IllegalTransitReason,
    },

    #[error("Transition from {from:?} failed: {source}")]
    TransitionFailed {
        from: S,
        state: S,
        #[source]
        source: BoxError,
    },
}

impl<S, O> TransitError<S, O> {
    pub(crate) fn illegal(from: S, operand: O, reason: IllegalTransitReason) -> Self {
        Self::IllegalTransit {
            from,
            operand,
            reason,
        }
    }

    pub(crate) fn failed(from: S, failure: TransitionFailure<S>) -> Self {
        Self::TransitionFailed {
            from,
            state: failure.state,
            source: failure.source,
        }
    }

    /// The state returned alongside this error.
    ///
    /// For an illegal transit this is the unchanged input state; for a
    /// failed transition it is whatever the transition function returned.
    pub fn state(&self) -> &S {
        match self {
            Self::IllegalTransit { from, .. } => from,
            Self::TransitionFailed { state, .. } => state,
        }
    }

    pub fn into_state(self) -> S {
        match self {
            Self::IllegalTransit { from, .. } => from,
            Self::TransitionFailed { state, .. } => state,
        }
    }

    pub fn reason(&self) -> Option<IllegalTransitReason> {
        match self {
            Self::IllegalTransit { reason, .. } => Some(*reason),
            Self::TransitionFailed { .. } => None,
        }
    }

    pub fn is_illegal_transit(&self) -> bool {
        matches!(self, Self::IllegalTransit { .. })
    }
}
