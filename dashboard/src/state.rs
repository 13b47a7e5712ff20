use goodbooks_config::LayoutConfig;
use goodbooks_database::BookCatalog;
use goodbooks_graph::{BookGraph, NetworkSettings, PhysicsSettings};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::errors::{ApiError, ApiResult};

/// How many of the most rated titles feed the book pickers
pub const POPULAR_TITLE_LIMIT: i64 = 1000;

pub struct AppState {
    /// `None` when Neo4j could not be reached at start-up
    graph: Option<Arc<dyn BookGraph>>,
    catalog: Arc<dyn BookCatalog>,
    layout: LayoutConfig,
    popular_titles: RwLock<Option<Arc<Vec<String>>>>,
}

impl AppState {
    pub fn new(
        graph: Option<Arc<dyn BookGraph>>,
        catalog: Arc<dyn BookCatalog>,
        layout: LayoutConfig,
    ) -> Self {
        Self {
            graph,
            catalog,
            layout,
            popular_titles: RwLock::new(None),
        }
    }

    pub fn graph(&self) -> ApiResult<&dyn BookGraph> {
        self.graph.as_deref().ok_or(ApiError::GraphUnavailable)
    }

    pub fn graph_connected(&self) -> bool {
        self.graph.is_some()
    }

    pub fn catalog(&self) -> &dyn BookCatalog {
        self.catalog.as_ref()
    }

    pub fn network_settings(&self, physics: PhysicsSettings) -> NetworkSettings {
        NetworkSettings {
            physics,
            layout: self.layout,
        }
    }

    /// Most rated titles, loaded on first use and kept for the process lifetime.
    ///
    /// A failed load is not cached; the next call tries again.
    pub async fn popular_titles(&self) -> ApiResult<Arc<Vec<String>>> {
        let cached = self.popular_titles.read().clone();
        if let Some(titles) = cached {
            return Ok(titles);
        }

        let titles = Arc::new(self.graph()?.popular_titles(POPULAR_TITLE_LIMIT).await?);
        tracing::info!(count = titles.len(), "Cached popular book titles");
        *self.popular_titles.write() = Some(Arc::clone(&titles));
        Ok(titles)
    }
}
