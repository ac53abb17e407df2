//! Domain services.
//!
//! Every public operation validates its input before doing anything else.
//! Operations that delegate to sibling operations call the public method,
//! never a private body, so no path skips the guard.

pub mod contact;
pub mod message;

pub use contact::ContactService;
pub use message::MessageService;
