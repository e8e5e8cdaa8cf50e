//! Append-only rule table.

use super::rule::Rule;
use super::{Operand, State};
use crate::builder::DefinitionError;
use crate::config::DuplicatePolicy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ordered collection of rules, written during construction only.
///
/// Insertion scans for a rule keyed on the same (state, operand) pair and
/// appends under one write lock, so concurrent builders never race past the
/// duplicate check. Dispatch does not read the table directly: it works on
/// the immutable [`snapshot`](RuleTable::snapshot) taken once building ends.
pub struct RuleTable<C, S, O> {
    rules: RwLock<Vec<Rule<C, S, O>>>,
    duplicates: DuplicatePolicy,
}

impl<C, S, O> RuleTable<C, S, O>
where
    C: 'static,
    S: State,
    O: Operand,
{
    pub fn new(duplicates: DuplicatePolicy) -> Self {
        Self {
            rules: RwLock::new(Vec::new()),
            duplicates,
        }
    }

    /// Validate and append a rule.
    pub fn insert(&self, rule: Rule<C, S, O>) -> Result<(), DefinitionError> {
        let mut rules = self.rules.write();

        if self.duplicates == DuplicatePolicy::Reject
            && rules
                .iter()
                .any(|existing| existing.shape_matches(rule.from(), rule.operand()))
        {
            return Err(DefinitionError::duplicate_rule(rule.from(), rule.operand()));
        }

        rules.push(rule);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Freeze the table into an immutable, shareable rule list.
    pub fn into_snapshot(self) -> Arc<[Rule<C, S, O>]> {
        Arc::from(self.rules.into_inner())
    }

    /// Copy the current contents into an immutable rule list.
    pub fn snapshot(&self) -> Arc<[Rule<C, S, O>]>
    where
        S: Clone,
        O: Clone,
    {
        Arc::from(self.rules.read().as_slice())
    }
}
