//! Violation reporting.
//!
//! [`ValidationFailure`] carries every violation from one call.
//! [`ErrorReport`] is the caller-facing `{ path: message }` shape.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::rules::Violation;

/// All violations produced by one validation call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    /// `Ok(())` when `violations` is empty, otherwise the aggregate failure.
    pub fn from_violations(violations: Vec<Violation>) -> Result<(), ValidationFailure> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { violations })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_violations(&self.violations)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(
            f,
            "{count} constraint violation{}",
            if count == 1 { "" } else { "s" }
        )?;
        for (i, v) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{}: {}", v.path, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Field path -> message map returned to clients.
///
/// When several violations share a path, the first one (earliest registered
/// spec) is kept. Keys serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport(BTreeMap<String, String>);

impl ErrorReport {
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut errors = BTreeMap::new();
        for violation in violations {
            errors
                .entry(violation.path.clone())
                .or_insert_with(|| violation.message.clone());
        }
        Self(errors)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
