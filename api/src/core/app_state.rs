use std::sync::Arc;

use vector_search::VectorSearch;

use crate::core::app_config::AppConfig;

/// Shared state for all HTTP handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at boot.
    pub config: Arc<AppConfig>,
    /// Vector store client, constructed once and shared by every request.
    pub search: Arc<dyn VectorSearch>,
}

impl AppState {
    pub fn new(config: AppConfig, search: Arc<dyn VectorSearch>) -> Self {
        Self {
            config: Arc::new(config),
            search,
        }
    }
}
