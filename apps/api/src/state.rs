use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::generation::analyzer::ProfileAnalyzer;
use crate::session::store::SessionStore;
use crate::templates::html::ResumeRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub renderer: Arc<ResumeRenderer>,
    /// Pluggable profile analyzer. Default: FixedProfileAnalyzer.
    pub analyzer: Arc<dyn ProfileAnalyzer>,
}

impl AppState {
    pub fn generation_delay(&self) -> Duration {
        self.config.generation_delay
    }
}
