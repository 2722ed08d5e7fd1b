use crate::config::ServerConfig;
use crate::store::ProductStore;
use std::sync::Arc;

/// Shared application state.
///
/// The store is constructed once at startup and injected here rather than
/// living as a module-level singleton, so tests can swap in the in-memory
/// backend.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Storage backend (shared across requests)
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    /// Create new application state around an already-built store
    pub fn new(config: ServerConfig, store: Arc<dyn ProductStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Whether a storage connection string was configured at startup
    pub fn storage_configured(&self) -> bool {
        self.config.mongodb_uri.is_some()
    }
}
