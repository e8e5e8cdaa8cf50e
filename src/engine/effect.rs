//! Effectful dispatch using Stillwater 0.11.0.
//!
//! `transit` is a plain function of (context, state, operand). This module
//! lifts it into a Stillwater effect whose environment is the context, so
//! dispatch composes with other effects and the context is supplied once,
//! at `run` time.

use crate::core::{Operand, State};
use crate::engine::error::TransitError;
use crate::engine::machine::Efsm;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

impl<C, S, O> Efsm<C, S, O>
where
    C: Clone + Send + Sync + 'static,
    S: State,
    O: Operand + Clone,
{
    /// Describe a transit as an effect over the context.
    ///
    /// Nothing runs until the effect is run against a context; each run
    /// dispatches afresh against the same frozen rules.
    pub fn transit_effect(&self, from: S, operand: O) -> BoxedEffect<S, TransitError<S, O>, C> {
        let machine = self.clone();

        from_fn(move |context: &C| machine.transit(context, from.clone(), operand.clone())).boxed()
    }
}
