//! Lotform Server - HTTP surface
//!
//! Exposes the passthrough read interface and the print-form trigger over
//! axum. Backend connections are established once at startup and injected
//! into the forwarder and composer held in the application state.

pub mod config;
pub mod routes;

use std::sync::Arc;

use lotform_core::{DocumentComposer, QueryForwarder};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<QueryForwarder>,
    pub composer: Arc<DocumentComposer>,
}

impl AppState {
    /// Assemble the state from its two components
    pub fn new(forwarder: QueryForwarder, composer: DocumentComposer) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
            composer: Arc::new(composer),
        }
    }
}
