//! Rule evaluator -- pure logic, no I/O.

use serde::Serialize;
use serde_json::{Map, Value};

use super::group::{self, ActiveGroups, Group};
use super::registry::RuleRegistry;
use super::report::ValidationFailure;
use super::rules::{ConstraintSpec, Violation};
use crate::error::CoreError;

/// A value whose fields are checked against the registry entry named by
/// [`Record::RECORD_TYPE`].
///
/// Fields are read through the type's `Serialize` impl, so the field names
/// the registry uses are the serialized (wire) names.
pub trait Record: Serialize {
    const RECORD_TYPE: &'static str;

    fn to_fields(&self) -> Result<Map<String, Value>, CoreError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(CoreError::Malformed(format!(
                "{} serialized to {other} instead of an object",
                Self::RECORD_TYPE
            ))),
            Err(e) => Err(CoreError::Internal(format!(
                "failed to serialize {}: {e}",
                Self::RECORD_TYPE
            ))),
        }
    }
}

/// Evaluates registered constraints against records.
///
/// Cheap to copy; borrows the registry it was built from.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r RuleRegistry {
        self.registry
    }

    /// Active groups for a record: default, `explicit`, and any group whose
    /// registered flag is set on the record.
    pub fn active_groups(
        &self,
        record_type: &str,
        fields: &Map<String, Value>,
        explicit: &[Group],
    ) -> ActiveGroups {
        let conditions = &self.registry.rules_for(record_type).conditions;
        group::select(conditions, fields, explicit)
    }

    /// Evaluate every spec of `record_type` that belongs to an active group.
    ///
    /// All failures are collected. Output follows registration order, with
    /// element violations in index order.
    pub fn validate(
        &self,
        record_type: &str,
        fields: &Map<String, Value>,
        active: &ActiveGroups,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        for spec in self.registry.lookup(record_type) {
            if !active.applies_to(&spec.groups) {
                continue;
            }
            evaluate_spec(spec, fields, &mut violations);
        }

        if !violations.is_empty() {
            tracing::debug!(
                record_type,
                count = violations.len(),
                "Record failed validation"
            );
        }
        violations
    }

    /// Resolve groups from `explicit` and the record's flags, then validate.
    pub fn validate_fields(
        &self,
        record_type: &str,
        fields: &Map<String, Value>,
        explicit: &[Group],
    ) -> Vec<Violation> {
        let active = self.active_groups(record_type, fields, explicit);
        self.validate(record_type, fields, &active)
    }

    pub fn validate_record<R: Record>(
        &self,
        record: &R,
        explicit: &[Group],
    ) -> Result<Vec<Violation>, CoreError> {
        let fields = record.to_fields()?;
        Ok(self.validate_fields(R::RECORD_TYPE, &fields, explicit))
    }

    /// Guard for service entry points: `Ok(())` only if the record has no
    /// violations in the resolved groups.
    pub fn check<R: Record>(&self, record: &R, explicit: &[Group]) -> Result<(), CoreError> {
        let violations = self.validate_record(record, explicit)?;
        ValidationFailure::from_violations(violations)?;
        Ok(())
    }
}

fn evaluate_spec(spec: &ConstraintSpec, fields: &Map<String, Value>, out: &mut Vec<Violation>) {
    let value = fields.get(spec.field);

    if spec.each_element {
        // A missing collection is the container spec's concern.
        if let Some(Value::Array(items)) = value {
            for (index, item) in items.iter().enumerate() {
                if !spec.predicate.test(Some(item)) {
                    out.push(Violation::new(format!("{}[{index}]", spec.field), spec));
                }
            }
        }
        return;
    }

    if !spec.predicate.test(value) {
        out.push(Violation::new(spec.field.to_string(), spec));
    }
}
