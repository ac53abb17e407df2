//! Record types and their registered constraints.

pub mod contact;
pub mod header;
pub mod message;

use std::sync::LazyLock;

use crate::validation::RuleRegistry;

pub use contact::{ContactType, CreateContact, DeleteContacts};
pub use header::Header;
pub use message::Message;

static REGISTRY: LazyLock<RuleRegistry> = LazyLock::new(|| {
    let mut builder = RuleRegistry::builder();
    contact::register(&mut builder);
    message::register(&mut builder);
    let registry = builder.build();
    tracing::debug!(
        record_types = registry.record_types().count(),
        "Constraint registry initialized"
    );
    registry
});

/// Process-wide registry holding the constraints of every record type in
/// this module.
pub fn registry() -> &'static RuleRegistry {
    &REGISTRY
}
