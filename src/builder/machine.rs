//! Builder collecting rules for a state machine.

use crate::builder::error::DefinitionError;
use crate::builder::transition::FromBuilder;
use crate::config::EfsmConfig;
use crate::core::{Guard, Operand, Rule, RuleTable, State, Transition};
use crate::engine::Efsm;
use parking_lot::Mutex;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder handed to configurators.
///
/// Every method takes `&self`, so a configurator may register rules from
/// several threads. Definition faults are recorded rather than raised; the
/// build functions turn the recorded faults into their return value.
pub struct EfsmBuilder<C, S, O> {
    table: RuleTable<C, S, O>,
    faults: Mutex<Vec<DefinitionError>>,
}

impl<C, S, O> EfsmBuilder<C, S, O>
where
    C: 'static,
    S: State,
    O: Operand,
{
    /// Create an empty builder.
    pub fn new(config: EfsmConfig) -> Self {
        Self {
            table: RuleTable::new(config.duplicates),
            faults: Mutex::new(Vec::new()),
        }
    }

    /// Start rules leaving `state`.
    pub fn from(&self, state: S) -> FromBuilder<'_, C, S, O> {
        FromBuilder::new(self, state)
    }

    /// Validate and add one rule.
    ///
    /// A fault is both returned and recorded, so configurators may ignore
    /// the result and still have the build fail.
    pub fn register(
        &self,
        from: S,
        operand: O,
        guard: Option<Guard<C, S, O>>,
        transition: Option<Transition<C, S, O>>,
    ) -> Result<(), DefinitionError> {
        let outcome = Rule::new(from, operand, guard, transition)
            .and_then(|rule| self.table.insert(rule));

        if let Err(fault) = &outcome {
            tracing::warn!(error = %fault, "rejected rule definition");
            self.faults.lock().push(fault.clone());
        }
        outcome
    }

    /// First fault recorded so far, if any.
    pub fn first_fault(&self) -> Option<DefinitionError> {
        self.faults.lock().first().cloned()
    }

    /// Number of rules accepted so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Freeze the accepted rules into a machine.
    /// Returns the first recorded fault instead if there is one.
    pub fn finish(self) -> Result<Efsm<C, S, O>, DefinitionError> {
        if let Some(fault) = self.faults.into_inner().into_iter().next() {
            return Err(fault);
        }

        let machine = Efsm::from_rules(self.table.into_snapshot());
        tracing::debug!(rules = machine.len(), "state machine built");
        Ok(machine)
    }

    /// Freeze the accepted rules into a machine, reporting ALL recorded
    /// faults instead if there are any.
    pub fn finish_validated(self) -> Validation<Efsm<C, S, O>, NonEmptyVec<DefinitionError>> {
        let checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = self
            .faults
            .into_inner()
            .into_iter()
            .map(|fault| Validation::fail(fault))
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(_) => {
                let machine = Efsm::from_rules(self.table.into_snapshot());
                tracing::debug!(rules = machine.len(), "state machine built");
                Validation::success(machine)
            }
            Validation::Failure(faults) => Validation::Failure(faults),
        }
    }
}
