//! Shared application state for all routes.

use std::sync::Arc;

use crate::store::PersonStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PersonStore>,
    /// Raw connection target for the pingdb wiring check; empty when no
    /// database is configured (memory-backed runs).
    pub database_url: String,
}
