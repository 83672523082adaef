//! Exhaustive geographic search over a capped, paginated places API.
//!
//! A free-text location is geocoded into a bounding box, sampled on an N×N
//! grid, and searched point by point. Points whose search hits the per-query
//! unique cap are subdivided into finer sub-grids, down to a fixed recursion
//! ceiling. One [`DedupRegistry`] per run keeps every entity id unique across
//! all points and levels; the surviving ids are then enriched with details.

pub mod api;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod grid;
pub mod point;
pub mod progress;
pub mod registry;
pub mod resolve;
pub mod searcher;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use api::PlacesApi;
pub use engine::{
    SearchEngine, SearchRequest, DEFAULT_GRID_SIZE, DEFAULT_MAX_DEPTH, DEFAULT_RADIUS_M,
};
pub use error::{ResolveError, SearchError};
pub use enrich::{enrich_all, fetch_details};
pub use grid::generate_grid;
pub use point::{search_from_point, MAX_PAGES_PER_POINT};
pub use progress::{NoopObserver, ProgressEvent, ProgressObserver};
pub use registry::DedupRegistry;
pub use resolve::resolve_bounds;
pub use searcher::{GridLevel, GridSearcher};
pub use settings::SearchSettings;
