//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::repository::DossierRepository;
use crate::services::job_tracker::JobTracker;
use crate::services::narrative::{NarrativeGenerator, RetryPolicy, TemplateGenerator};

/// Shared application state passed to all handlers.
///
/// Everything a handler depends on is carried here explicitly: repository,
/// job tracker, narrative generator and resolved configuration.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn DossierRepository>,
    pub job_tracker: JobTracker,
    pub generator: Arc<dyn NarrativeGenerator>,
    pub retry_policy: RetryPolicy,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with the built-in template generator and default retry policy.
    pub fn new(repository: Arc<dyn DossierRepository>, config: AppConfig) -> Self {
        Self {
            repository,
            job_tracker: JobTracker::new(),
            generator: Arc::new(TemplateGenerator),
            retry_policy: RetryPolicy::default(),
            config: Arc::new(config),
        }
    }

    /// Swap in a different narrative generator (e.g. a hosted-model client).
    pub fn with_generator(mut self, generator: Arc<dyn NarrativeGenerator>) -> Self {
        self.generator = generator;
        self
    }
}
