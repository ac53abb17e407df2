//! Validation groups and active-group selection.
//!
//! Every call validates the [`Group::DEFAULT`] group. Named groups join the
//! active set either because the caller asked for them or because a
//! [`GroupCondition`] registered for the record type fires on the record's
//! own data (e.g. `isAd: true` activates [`Group::AD`]).

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier partitioning which constraint specs apply to a call.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(Cow<'static, str>);

impl Group {
    /// Always active.
    pub const DEFAULT: Group = Group(Cow::Borrowed("default"));
    /// Advertisement-only constraints.
    pub const AD: Group = Group(Cow::Borrowed("Ad"));

    /// A caller-defined group.
    pub fn named(name: impl Into<String>) -> Self {
        Group(Cow::Owned(name.into()))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Activates `group` when the boolean field `flag_field` is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCondition {
    pub flag_field: &'static str,
    pub group: Group,
}

impl GroupCondition {
    fn holds(&self, fields: &Map<String, Value>) -> bool {
        fields.get(self.flag_field).and_then(Value::as_bool) == Some(true)
    }
}

/// The set of groups in force for one validation call.
///
/// Always contains [`Group::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGroups(BTreeSet<Group>);

impl Default for ActiveGroups {
    fn default() -> Self {
        Self(BTreeSet::from([Group::DEFAULT]))
    }
}

impl ActiveGroups {
    /// Default group plus every explicitly requested group.
    pub fn from_explicit(explicit: &[Group]) -> Self {
        let mut active = Self::default();
        active.0.extend(explicit.iter().cloned());
        active
    }

    pub fn with(mut self, group: Group) -> Self {
        self.0.insert(group);
        self
    }

    pub fn contains(&self, group: &Group) -> bool {
        self.0.contains(group)
    }

    /// Whether a spec declared for `groups` applies. An empty list means
    /// the spec belongs to the default group.
    pub fn applies_to(&self, groups: &[Group]) -> bool {
        if groups.is_empty() {
            return true;
        }
        groups.iter().any(|g| self.0.contains(g))
    }
}

/// Compute the active groups for one record.
///
/// The result depends only on `explicit` and the record's own flag values.
pub fn select(
    conditions: &[GroupCondition],
    fields: &Map<String, Value>,
    explicit: &[Group],
) -> ActiveGroups {
    let mut active = ActiveGroups::from_explicit(explicit);
    for condition in conditions {
        if condition.holds(fields) {
            tracing::debug!(
                flag = condition.flag_field,
                group = %condition.group,
                "Group activated by record flag"
            );
            active = active.with(condition.group.clone());
        }
    }
    active
}
