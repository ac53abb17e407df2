//! Constraint spec and violation types.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::group::Group;
use super::predicate::Predicate;

/// One constraint attached to one field of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSpec {
    pub field: &'static str,
    pub predicate: Predicate,
    /// Groups the spec belongs to. Empty means [`Group::DEFAULT`].
    pub groups: Vec<Group>,
    pub message: Cow<'static, str>,
    /// Apply the predicate to each element of a collection field instead of
    /// the field itself.
    pub each_element: bool,
}

impl ConstraintSpec {
    pub fn new(field: &'static str, predicate: Predicate) -> Self {
        let message = predicate.default_message();
        Self {
            field,
            predicate,
            groups: Vec::new(),
            message,
            each_element: false,
        }
    }

    pub fn in_groups(mut self, groups: &[Group]) -> Self {
        self.groups = groups.to_vec();
        self
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    pub fn for_each_element(mut self) -> Self {
        self.each_element = true;
        self
    }
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// `field`, or `field[index]` for a collection element.
    pub path: String,
    /// Predicate name, e.g. `not_blank`.
    pub constraint: String,
    pub message: String,
}

impl Violation {
    pub(crate) fn new(path: String, spec: &ConstraintSpec) -> Self {
        Self {
            path,
            constraint: spec.predicate.name().to_string(),
            message: spec.message.to_string(),
        }
    }
}
