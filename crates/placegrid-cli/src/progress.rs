//! Human-readable progress on stderr.

use placegrid_search::{ProgressEvent, ProgressObserver};

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TerminalObserver;

impl ProgressObserver for TerminalObserver {
    fn on_event(&self, event: &ProgressEvent) {
        eprintln!("{}", describe(event));
    }
}

pub(crate) fn describe(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::LevelStarted {
            depth,
            grid_size,
            radius_m,
            bounds,
        } => format!(
            "level {depth}: {grid_size}x{grid_size} grid, radius {radius_m} m, {} to {}",
            bounds.low(),
            bounds.high()
        ),
        ProgressEvent::GridProgress {
            index,
            total,
            unique_count,
        } => format!("  point {index}/{total} ({unique_count} unique so far)"),
        ProgressEvent::DetailsProgress { index, total } => {
            format!("details {index}/{total}")
        }
    }
}
