//! Recursive grid search with saturation-driven subdivision.

use std::future::Future;
use std::pin::Pin;

use placegrid_core::{BoundingBox, LatLng, SearchResult};

use crate::api::PlacesApi;
use crate::grid::{child_level_params, generate_grid, subdivision_bounds};
use crate::point::search_from_point;
use crate::progress::{ProgressEvent, ProgressObserver};
use crate::registry::DedupRegistry;
use crate::settings::SearchSettings;

/// One level of the recursion: the area to sample and how finely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLevel {
    pub bounds: BoundingBox,
    pub grid_size: usize,
    pub radius_m: u32,
    pub depth: u32,
}

type LevelFuture<'s> = Pin<Box<dyn Future<Output = Vec<SearchResult>> + Send + 's>>;

/// Drives grid generation and point searches across recursion levels.
///
/// Everything runs sequentially: points in row-major order, then each
/// saturated point's sub-level in the order the points were visited.
pub struct GridSearcher<'a, A: ?Sized> {
    api: &'a A,
    settings: &'a SearchSettings,
    observer: &'a dyn ProgressObserver,
    max_depth: u32,
}

impl<'a, A> GridSearcher<'a, A>
where
    A: PlacesApi + ?Sized,
{
    #[must_use]
    pub fn new(
        api: &'a A,
        settings: &'a SearchSettings,
        observer: &'a dyn ProgressObserver,
        max_depth: u32,
    ) -> Self {
        Self {
            api,
            settings,
            observer,
            max_depth,
        }
    }

    /// Searches `level` and, below the depth ceiling, every saturated point's
    /// neighbourhood at the next depth.
    ///
    /// At `depth >= max_depth` the level is searched flat, without further
    /// subdivision. The returned ids are unique across the whole run because
    /// every point search goes through `registry`.
    pub fn search_grid<'s>(
        &'s self,
        registry: &'s mut DedupRegistry,
        query: &'s str,
        level: GridLevel,
    ) -> LevelFuture<'s> {
        Box::pin(async move {
            self.notify_level(&level);

            if level.depth >= self.max_depth {
                tracing::info!(
                    depth = level.depth,
                    max_depth = self.max_depth,
                    "recursion ceiling reached; flat search"
                );
                let (found, _) = self.search_points(registry, query, &level).await;
                return found;
            }

            tracing::info!(
                depth = level.depth,
                max_depth = self.max_depth,
                grid_size = level.grid_size,
                radius_m = level.radius_m,
                "searching level"
            );
            let (mut found, saturated) = self.search_points(registry, query, &level).await;

            // Only the cap triggers subdivision; sparse points never do.
            let (child_grid_size, child_radius_m) =
                child_level_params(level.grid_size, level.radius_m);
            for point in saturated {
                let bounds = subdivision_bounds(&level.bounds, point, child_radius_m);
                tracing::info!(
                    depth = level.depth + 1,
                    center = %point,
                    "subdividing saturated point"
                );
                let child = GridLevel {
                    bounds,
                    grid_size: child_grid_size,
                    radius_m: child_radius_m,
                    depth: level.depth + 1,
                };
                let sub = self.search_grid(&mut *registry, query, child).await;
                found.extend(sub);
            }

            found
        })
    }

    /// One pass over the level's grid in row-major order.
    ///
    /// Returns the new ids and the locations of points that hit the cap.
    async fn search_points(
        &self,
        registry: &mut DedupRegistry,
        query: &str,
        level: &GridLevel,
    ) -> (Vec<SearchResult>, Vec<LatLng>) {
        let points = generate_grid(&level.bounds, level.grid_size);
        let total = points.len();
        let mut found = Vec::new();
        let mut saturated = Vec::new();

        for (idx, point) in points.iter().enumerate() {
            self.observer.on_event(&ProgressEvent::GridProgress {
                index: idx + 1,
                total,
                unique_count: registry.len(),
            });
            let outcome = search_from_point(
                self.api,
                registry,
                self.settings,
                query,
                point.location(),
                level.radius_m,
            )
            .await;
            tracing::debug!(
                depth = level.depth,
                point = %point.label(),
                unique = outcome.unique_entities.len(),
                raw = outcome.raw_count,
                limit_reached = outcome.limit_reached,
                "point searched"
            );

            found.extend(outcome.unique_entities);
            if outcome.limit_reached {
                saturated.push(point.location());
            }
        }

        (found, saturated)
    }

    fn notify_level(&self, level: &GridLevel) {
        self.observer.on_event(&ProgressEvent::LevelStarted {
            depth: level.depth,
            grid_size: level.grid_size,
            radius_m: level.radius_m,
            bounds: level.bounds,
        });
    }
}
