use std::sync::Arc;

use roster_core::models;
use roster_core::service::{ContactService, MessageService};
use roster_core::validation::Validator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Validator over the process-wide constraint registry.
    pub validator: Validator<'static>,
    pub contacts: ContactService,
    pub messages: MessageService,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let validator = Validator::new(models::registry());
        Self {
            config: Arc::new(config),
            validator,
            contacts: ContactService::new(validator),
            messages: MessageService::new(validator),
        }
    }
}
