//! Geographic grid search infrastructure.
//!
//! Generates uniform lat/lng sample points over a bounding box and computes
//! the finer boxes used when a point saturates.

use placegrid_core::{BoundingBox, GridPoint, LatLng};
use placegrid_places::MAX_SEARCH_RADIUS_M;

/// Smallest grid used for a subdivided level.
pub const MIN_GRID_SIZE: usize = 2;

/// Smallest search radius used for a subdivided level, in metres.
pub const MIN_RADIUS_M: u32 = 100;

/// Generate a `grid_size × grid_size` lattice across `bounds`, row-major.
///
/// Rows walk latitude from `low` to `high`, columns walk longitude. The first
/// point is exactly `bounds.low()` and the last exactly `bounds.high()`.
/// A grid size of 1 yields the centre point alone; 0 yields nothing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_grid(bounds: &BoundingBox, grid_size: usize) -> Vec<GridPoint> {
    match grid_size {
        0 => return Vec::new(),
        1 => {
            let center = bounds.center();
            return vec![GridPoint {
                lat: center.lat,
                lng: center.lng,
                row: 1,
                col: 1,
            }];
        }
        _ => {}
    }

    let (low, high) = (bounds.low(), bounds.high());
    let last = grid_size - 1;
    let lat_step = (high.lat - low.lat) / last as f64;
    let lng_step = (high.lng - low.lng) / last as f64;

    // Pin the final row/column to the exact edge so float drift never pulls
    // the corner points inside the box.
    let axis = |min: f64, max: f64, step: f64, i: usize| {
        if i == last {
            max
        } else {
            min + i as f64 * step
        }
    };

    let mut points = Vec::with_capacity(grid_size * grid_size);
    for i in 0..grid_size {
        let lat = axis(low.lat, high.lat, lat_step, i);
        for j in 0..grid_size {
            points.push(GridPoint {
                lat,
                lng: axis(low.lng, high.lng, lng_step, j),
                row: i + 1,
                col: j + 1,
            });
        }
    }
    points
}

/// Grid size and radius for the level below one searched with `grid_size`
/// and `radius_m`: both halve, floored at [`MIN_GRID_SIZE`] and
/// [`MIN_RADIUS_M`]. The radius is first capped at what the API accepts.
#[must_use]
pub fn child_level_params(grid_size: usize, radius_m: u32) -> (usize, u32) {
    let effective = radius_m.min(MAX_SEARCH_RADIUS_M);
    (
        (grid_size / 2).max(MIN_GRID_SIZE),
        (effective / 2).max(MIN_RADIUS_M),
    )
}

/// The box searched beneath a saturated point.
///
/// Centred on `point` with a half-width of `half_width_m` metres, clipped to
/// `parent` so a sub-search never leaves the region it refines.
#[must_use]
pub fn subdivision_bounds(parent: &BoundingBox, point: LatLng, half_width_m: u32) -> BoundingBox {
    BoundingBox::around(point, f64::from(half_width_m)).clamp_to(parent)
}
