//! Dispatch engine over a frozen rule table.

use crate::core::{Operand, Rule, State};
use crate::engine::error::{IllegalTransitReason, TransitError};
use std::fmt;
use std::sync::Arc;

/// Extended finite-state machine.
///
/// Holds an immutable snapshot of its rules and no other state, so a
/// machine can be cloned cheaply and shared across any number of threads
/// issuing [`transit`](Efsm::transit) concurrently without locking.
///
/// Machines are created with [`build`](crate::build) and friends.
pub struct Efsm<C, S, O> {
    rules: Arc<[Rule<C, S, O>]>,
}

impl<C, S, O> Efsm<C, S, O>
where
    C: 'static,
    S: State,
    O: Operand,
{
    pub(crate) fn from_rules(rules: Arc<[Rule<C, S, O>]>) -> Self {
        Self { rules }
    }

    /// Apply the first rule keyed on (`from`, `operand`) whose guard passes.
    ///
    /// The transition function's result, success or failure, is passed
    /// through unchanged. When no rule fires the error carries `from`
    /// unchanged and tells apart "nothing keyed on this pair" from "every
    /// guard refused".
    pub fn transit(&self, context: &C, from: S, operand: O) -> Result<S, TransitError<S, O>> {
        let mut shape_matched = false;

        for rule in self.rules.iter() {
            if !rule.shape_matches(&from, &operand) {
                continue;
            }
            shape_matched = true;

            if rule.admits(context, &from, &operand) {
                return rule
                    .apply(context, &from, &operand)
                    .map_err(|failure| TransitError::failed(from.clone(), failure));
            }
        }

        let reason = if shape_matched {
            IllegalTransitReason::GuardFailed
        } else {
            IllegalTransitReason::NoMatchingRule
        };
        tracing::trace!(from = ?from, operand = ?operand, %reason, "illegal transit");

        Err(TransitError::illegal(from, operand, reason))
    }

    /// Whether `transit` would fire a rule, without running it (pure).
    pub fn can_transit(&self, context: &C, from: &S, operand: &O) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.shape_matches(from, operand) && rule.admits(context, from, operand))
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[Rule<C, S, O>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<C, S, O> Clone for Efsm<C, S, O> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<C, S: fmt::Debug, O: fmt::Debug> fmt::Debug for Efsm<C, S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Efsm").field("rules", &self.rules).finish()
    }
}
