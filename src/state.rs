//! Shared application state.

use std::sync::Arc;

use crate::application::services::AnalysisService;
use crate::domain::repositories::StringRepository;

/// State shared by all HTTP handlers.
///
/// Cloned per request by Axum; the services inside are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    /// Builds the service graph on top of the given storage backend.
    pub fn new(repository: Arc<dyn StringRepository>) -> Self {
        Self {
            analysis_service: Arc::new(AnalysisService::new(repository)),
        }
    }
}
