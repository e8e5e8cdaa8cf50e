//! Guard predicates for controlling rule application.
//!
//! A guard sees the caller's context, the current state and the operand,
//! and decides whether a shape-matched rule actually fires.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a shape-matched rule can fire.
///
/// Guards are evaluated during dispatch, possibly from many threads at
/// once, so the predicate must be deterministic and thread-safe.
///
/// # Example
///
/// ```rust
/// use efsm::core::Guard;
///
/// struct Account {
///     balance: u64,
/// }
///
/// let funded = Guard::new(|ctx: &Account, _state: &&str, amount: &u64| ctx.balance >= *amount);
///
/// assert!(funded.check(&Account { balance: 10 }, &"open", &5));
/// assert!(!funded.check(&Account { balance: 1 }, &"open", &5));
/// ```
pub struct Guard<C, S, O> {
    predicate: Arc<dyn Fn(&C, &S, &O) -> bool + Send + Sync>,
}

impl<C, S, O> Guard<C, S, O> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, &S, &O) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that admits every input. Used when a rule is registered
    /// without one.
    pub fn always() -> Self
    where
        C: 'static,
        S: 'static,
        O: 'static,
    {
        Guard::new(|_: &C, _: &S, _: &O| true)
    }

    /// Evaluate the predicate.
    pub fn check(&self, context: &C, state: &S, operand: &O) -> bool {
        (self.predicate)(context, state, operand)
    }
}

impl<C, S, O> Clone for Guard<C, S, O> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C, S, O> fmt::Debug for Guard<C, S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
