pub mod catalog;
pub mod config;
pub mod error;
pub mod headline;
pub mod provider;
pub mod rest;
pub mod rng;
pub mod synth;

use std::sync::Arc;

use config::InsightConfig;
use provider::InsightProvider;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<InsightConfig>,
    /// Insight provider — remote-with-fallback or pure local, per config.
    pub provider: Arc<InsightProvider>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: Arc<InsightConfig>) -> Self {
        let provider = Arc::new(InsightProvider::new(config.clone()));
        Self {
            config,
            provider,
            started_at: std::time::Instant::now(),
        }
    }
}
