use std::sync::Arc;

use crate::config::Config;
use crate::models::QueryLayout;
use crate::services::RecipeCatalog;

/// Per-request knobs taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct RecommendationSettings {
    pub default_top_n: usize,
    pub max_top_n: usize,
    pub query_layout: QueryLayout,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RecommendationSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_top_n: config.default_top_n,
            max_top_n: config.max_top_n,
            query_layout: config.query_layout,
        }
    }
}

/// Shared application state
///
/// The catalog is loaded once and only ever read, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RecipeCatalog>,
    pub settings: RecommendationSettings,
}

impl AppState {
    pub fn new(catalog: RecipeCatalog, settings: RecommendationSettings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings,
        }
    }
}
