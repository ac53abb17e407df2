//! Static constraint registry.
//!
//! A [`RuleRegistry`] is assembled once through [`RegistryBuilder`] and is
//! immutable afterwards, so a single instance can be shared by every request
//! without synchronization.

use std::collections::HashMap;

use super::group::{Group, GroupCondition};
use super::predicate::Predicate;
use super::rules::ConstraintSpec;

/// Constraints and group conditions for one record type.
#[derive(Debug, Clone, Default)]
pub struct RecordRules {
    pub specs: Vec<ConstraintSpec>,
    pub conditions: Vec<GroupCondition>,
}

#[derive(Debug, Default)]
pub struct RuleRegistry {
    records: HashMap<&'static str, RecordRules>,
}

static NO_RULES: RecordRules = RecordRules {
    specs: Vec::new(),
    conditions: Vec::new(),
};

impl RuleRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Specs for `record_type` in registration order. Unknown types have none.
    pub fn lookup(&self, record_type: &str) -> &[ConstraintSpec] {
        &self.rules_for(record_type).specs
    }

    pub fn rules_for(&self, record_type: &str) -> &RecordRules {
        self.records.get(record_type).unwrap_or(&NO_RULES)
    }

    pub fn record_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.keys().copied()
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    records: HashMap<&'static str, RecordRules>,
}

impl RegistryBuilder {
    /// Attach `predicate` to `field`. An empty `groups` slice registers the
    /// spec in the default group.
    pub fn register(
        &mut self,
        record_type: &'static str,
        field: &'static str,
        predicate: Predicate,
        groups: &[Group],
    ) -> &mut Self {
        self.register_spec(
            record_type,
            ConstraintSpec::new(field, predicate).in_groups(groups),
        )
    }

    /// Attach `predicate` to every element of the collection `field`.
    pub fn register_elements(
        &mut self,
        record_type: &'static str,
        field: &'static str,
        predicate: Predicate,
        groups: &[Group],
    ) -> &mut Self {
        self.register_spec(
            record_type,
            ConstraintSpec::new(field, predicate)
                .in_groups(groups)
                .for_each_element(),
        )
    }

    pub fn register_spec(&mut self, record_type: &'static str, spec: ConstraintSpec) -> &mut Self {
        self.records.entry(record_type).or_default().specs.push(spec);
        self
    }

    /// Activate `group` for `record_type` whenever the boolean `flag_field`
    /// of the record is `true`.
    pub fn register_condition(
        &mut self,
        record_type: &'static str,
        flag_field: &'static str,
        group: Group,
    ) -> &mut Self {
        self.records
            .entry(record_type)
            .or_default()
            .conditions
            .push(GroupCondition { flag_field, group });
        self
    }

    pub fn build(&mut self) -> RuleRegistry {
        RuleRegistry {
            records: std::mem::take(&mut self.records),
        }
    }
}
