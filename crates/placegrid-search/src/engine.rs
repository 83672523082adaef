//! Top-level run orchestration: resolve, search, enrich.

use placegrid_core::{AppConfig, EnrichedEntity, SearchResult};

use crate::api::PlacesApi;
use crate::enrich::enrich_all;
use crate::error::SearchError;
use crate::progress::{NoopObserver, ProgressObserver};
use crate::registry::DedupRegistry;
use crate::resolve::resolve_bounds;
use crate::searcher::{GridLevel, GridSearcher};
use crate::settings::SearchSettings;

pub const DEFAULT_GRID_SIZE: usize = 6;
pub const DEFAULT_RADIUS_M: u32 = 3_000;
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Parameters of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Free-text location handed to the geocoder.
    pub location: String,
    pub grid_size: usize,
    pub radius_m: u32,
    pub max_depth: u32,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
            grid_size: DEFAULT_GRID_SIZE,
            radius_m: DEFAULT_RADIUS_M,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Takes grid defaults from configuration instead of the built-in ones.
    #[must_use]
    pub fn with_config_defaults(mut self, config: &AppConfig) -> Self {
        self.grid_size = config.grid_size;
        self.radius_m = config.radius_m;
        self.max_depth = config.max_depth;
        self
    }

    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_radius_m(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Runs exhaustive searches against one upstream API.
pub struct SearchEngine<A> {
    api: A,
    settings: SearchSettings,
    observer: Box<dyn ProgressObserver>,
}

impl<A: PlacesApi> SearchEngine<A> {
    #[must_use]
    pub fn new(api: A, settings: SearchSettings) -> Self {
        Self {
            api,
            settings,
            observer: Box::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Resolves, searches and enriches with a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Resolution`] when the location cannot be
    /// geocoded; nothing else aborts a run. Failures of individual points or
    /// details lookups only shrink the result.
    pub async fn run(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<EnrichedEntity>, SearchError> {
        let mut registry = DedupRegistry::new();
        self.run_with_registry(&mut registry, request).await
    }

    /// Like [`run`](Self::run) but reuses a caller-owned registry, which is
    /// cleared before any work starts.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub async fn run_with_registry(
        &self,
        registry: &mut DedupRegistry,
        request: &SearchRequest,
    ) -> Result<Vec<EnrichedEntity>, SearchError> {
        let ids = self.collect_ids(registry, request).await?;

        let enriched = enrich_all(&self.api, &self.settings, &*self.observer, &ids).await;
        tracing::info!(
            query = %request.query,
            location = %request.location,
            unique = ids.len(),
            enriched = enriched.len(),
            "run complete"
        );
        Ok(enriched)
    }

    /// Resolves and searches without the details stage.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub async fn search_ids(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut registry = DedupRegistry::new();
        self.collect_ids(&mut registry, request).await
    }

    async fn collect_ids(
        &self,
        registry: &mut DedupRegistry,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, SearchError> {
        registry.clear();

        tracing::info!(
            query = %request.query,
            location = %request.location,
            grid_size = request.grid_size,
            radius_m = request.radius_m,
            max_depth = request.max_depth,
            "starting run"
        );

        let bounds = resolve_bounds(&self.api, &request.location)
            .await
            .map_err(|source| SearchError::Resolution {
                location: request.location.clone(),
                source,
            })?;

        let searcher = GridSearcher::new(
            &self.api,
            &self.settings,
            &*self.observer,
            request.max_depth,
        );
        let level = GridLevel {
            bounds,
            grid_size: request.grid_size,
            radius_m: request.radius_m,
            depth: 0,
        };
        let ids = searcher.search_grid(registry, &request.query, level).await;

        tracing::info!(unique = ids.len(), "grid search complete");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeApi;

    #[test]
    fn request_defaults() {
        let request = SearchRequest::new("cotillones", "Recoleta");
        assert_eq!(request.grid_size, 6);
        assert_eq!(request.radius_m, 3000);
        assert_eq!(request.max_depth, 2);
    }

    #[tokio::test]
    async fn blank_location_fails_as_resolution() {
        let engine = SearchEngine::new(FakeApi::new(), SearchSettings::without_delays(60));

        let err = engine
            .run(&SearchRequest::new("bars", "  "))
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::Resolution { .. }));
        assert_eq!(engine.api().search_count(), 0);
    }

    #[tokio::test]
    async fn unresolvable_location_names_the_location() {
        let engine = SearchEngine::new(FakeApi::new(), SearchSettings::without_delays(60));

        let err = engine
            .run(&SearchRequest::new("bars", "Atlantis"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Atlantis"), "got: {err}");
        assert_eq!(engine.api().search_count(), 0);
    }
}
