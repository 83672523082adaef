//! Progress side-channel for long-running searches.
//!
//! Observers are informational only: the engine never reads anything back
//! from them and their absence ([`NoopObserver`]) changes nothing.

use placegrid_core::BoundingBox;

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// A grid level is about to be searched.
    LevelStarted {
        depth: u32,
        grid_size: usize,
        radius_m: u32,
        bounds: BoundingBox,
    },
    /// About to search point `index` (1-based) of `total` at the current level.
    /// `unique_count` is the number of unique ids found so far in the run.
    GridProgress {
        index: usize,
        total: usize,
        unique_count: usize,
    },
    /// About to fetch details for entity `index` (1-based) of `total`.
    DetailsProgress { index: usize, total: usize },
}

pub trait ProgressObserver: Send + Sync {
    fn on_event(&self, event: &ProgressEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_event(&self, _event: &ProgressEvent) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn on_event(&self, event: &ProgressEvent) {
        self(event);
    }
}
