//! Record validation engine.
//!
//! Constraints are plain data held in a [`registry::RuleRegistry`] that is
//! built once at startup. The [`evaluator::Validator`] walks a record's
//! fields against the specs of the active [`group::Group`]s, and
//! [`report`] turns the resulting violations into caller-facing errors.

pub mod emoji;
pub mod evaluator;
pub mod group;
pub mod predicate;
pub mod registry;
pub mod report;
pub mod rules;

pub use evaluator::{Record, Validator};
pub use group::{ActiveGroups, Group};
pub use predicate::Predicate;
pub use registry::RuleRegistry;
pub use report::{ErrorReport, ValidationFailure};
pub use rules::{ConstraintSpec, Violation};
