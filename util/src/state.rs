//! Application state container shared across Axum route handlers.
//!
//! Holds the loaded configuration and the value store every handler reads from or
//! appends to. Both sit behind an `Arc`, so cloning the state per request is cheap.

use std::sync::Arc;

use sheets::{GoogleSheets, ValueStore};

use crate::config::AppConfig;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    store: Arc<dyn ValueStore>,
}

impl AppState {
    /// Creates a new `AppState` from a configuration and any value store.
    ///
    /// Tests pass a [`sheets::MemoryStore`] here.
    pub fn new(config: AppConfig, store: Arc<dyn ValueStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Creates the production state, talking to Google at the configured endpoints.
    pub fn from_config(config: AppConfig) -> Self {
        let store = GoogleSheets::new(config.sheets_api_base.clone(), config.token_uri.clone());
        Self::new(config, Arc::new(store))
    }

    /// Returns a shared reference to the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a shared reference to the value store.
    pub fn store(&self) -> &dyn ValueStore {
        self.store.as_ref()
    }
}
