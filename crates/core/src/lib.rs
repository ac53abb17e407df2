//! Roster core: constraint registry, validator, and the services that guard
//! their inputs with it.
//!
//! Nothing in this crate performs I/O. The HTTP surface lives in
//! `roster-api`.

pub mod error;
pub mod models;
pub mod service;
pub mod validation;
