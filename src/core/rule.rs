//! Transition functions and the immutable rule record.

use super::guard::Guard;
use super::operand::Operand;
use super::state::State;
use crate::builder::DefinitionError;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Boxed error produced by caller-supplied transition functions.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure reported by a transition function.
///
/// Carries the state the function wants returned to the caller together
/// with its own error. The engine passes both through untouched.
#[derive(Debug)]
pub struct TransitionFailure<S> {
    pub state: S,
    pub source: BoxError,
}

impl<S> TransitionFailure<S> {
    pub fn new(state: S, source: impl Into<BoxError>) -> Self {
        Self {
            state,
            source: source.into(),
        }
    }
}

/// Type alias for the function signature stored in a [`Transition`].
pub type TransitionFn<C, S, O> =
    Arc<dyn Fn(&C, &S, &O) -> Result<S, TransitionFailure<S>> + Send + Sync>;

/// Function computing the next state of a rule.
pub struct Transition<C, S, O> {
    apply: TransitionFn<C, S, O>,
}

impl<C, S, O> Transition<C, S, O> {
    /// Wrap a transition function.
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&C, &S, &O) -> Result<S, TransitionFailure<S>> + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
        }
    }

    /// Transition that always lands on `to`.
    pub fn constant(to: S) -> Self
    where
        C: 'static,
        S: Clone + Send + Sync + 'static,
        O: 'static,
    {
        Self::new(move |_: &C, _: &S, _: &O| Ok(to.clone()))
    }

    /// Compute the next state.
    pub fn apply(&self, context: &C, from: &S, operand: &O) -> Result<S, TransitionFailure<S>> {
        (self.apply)(context, from, operand)
    }
}

impl<C, S, O> Clone for Transition<C, S, O> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<C, S, O> fmt::Debug for Transition<C, S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition").finish_non_exhaustive()
    }
}

/// A validated transition rule.
///
/// Rules are immutable once created; the only way to obtain one is
/// [`Rule::new`], which enforces the definition checks.
pub struct Rule<C, S, O> {
    from: S,
    operand: O,
    guard: Guard<C, S, O>,
    transition: Transition<C, S, O>,
}

impl<C, S, O> Rule<C, S, O>
where
    C: 'static,
    S: State,
    O: Operand,
{
    /// Create a rule, checking the source state and the transition.
    ///
    /// An absent guard admits every input.
    pub fn new(
        from: S,
        operand: O,
        guard: Option<Guard<C, S, O>>,
        transition: Option<Transition<C, S, O>>,
    ) -> Result<Self, DefinitionError> {
        from.validate()
            .map_err(|reason| DefinitionError::invalid_state(&from, reason))?;
        let transition =
            transition.ok_or_else(|| DefinitionError::missing_transition(&from, &operand))?;

        Ok(Self {
            from,
            operand,
            guard: guard.unwrap_or_else(Guard::always),
            transition,
        })
    }

    /// Source state the rule is keyed on.
    pub fn from(&self) -> &S {
        &self.from
    }

    /// Operand the rule is keyed on.
    pub fn operand(&self) -> &O {
        &self.operand
    }

    /// Whether this rule is keyed on the given state and operand (pure).
    pub fn shape_matches(&self, state: &S, operand: &O) -> bool {
        self.from.same_state(state) && self.operand.same_operand(operand)
    }

    /// Evaluate the guard (pure).
    pub fn admits(&self, context: &C, state: &S, operand: &O) -> bool {
        self.guard.check(context, state, operand)
    }

    /// Run the transition function. Does not consult the guard.
    pub fn apply(&self, context: &C, state: &S, operand: &O) -> Result<S, TransitionFailure<S>> {
        self.transition.apply(context, state, operand)
    }
}

impl<C, S: Clone, O: Clone> Clone for Rule<C, S, O> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            operand: self.operand.clone(),
            guard: self.guard.clone(),
            transition: self.transition.clone(),
        }
    }
}

impl<C, S: fmt::Debug, O: fmt::Debug> fmt::Debug for Rule<C, S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("from", &self.from)
            .field("operand", &self.operand)
            .finish_non_exhaustive()
    }
}
