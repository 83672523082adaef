//! Geographic primitives: coordinates, bounding boxes and grid sample points.

use serde::{Deserialize, Serialize};

/// Metres covered by one degree of latitude.
pub const METERS_PER_LAT_DEGREE: f64 = 111_000.0;

/// Floor for the latitude cosine so longitude spans stay finite near the poles.
const MIN_LAT_COSINE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// An axis-aligned lat/lng box with a centre point.
///
/// `low` is the southwest corner and `high` the northeast corner. The
/// constructors keep `low <= high` on both axes; fields are private so the
/// box cannot be mutated into an inverted state after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    low: LatLng,
    high: LatLng,
    center: LatLng,
}

impl BoundingBox {
    /// Builds a box from two corners and a centre, swapping any inverted axis.
    #[must_use]
    pub fn new(low: LatLng, high: LatLng, center: LatLng) -> Self {
        Self {
            low: LatLng::new(low.lat.min(high.lat), low.lng.min(high.lng)),
            high: LatLng::new(low.lat.max(high.lat), low.lng.max(high.lng)),
            center,
        }
    }

    /// Builds a box from two corners with the arithmetic midpoint as centre.
    #[must_use]
    pub fn from_corners(low: LatLng, high: LatLng) -> Self {
        let center = LatLng::new((low.lat + high.lat) / 2.0, (low.lng + high.lng) / 2.0);
        Self::new(low, high, center)
    }

    /// A box centred on `center` extending `half_width_m` metres in each
    /// cardinal direction.
    ///
    /// The longitude span widens with latitude so the physical half-width stays
    /// roughly constant.
    #[must_use]
    pub fn around(center: LatLng, half_width_m: f64) -> Self {
        let dlat = half_width_m / METERS_PER_LAT_DEGREE;
        let cos_lat = center.lat.to_radians().cos().abs().max(MIN_LAT_COSINE);
        let dlng = half_width_m / (METERS_PER_LAT_DEGREE * cos_lat);
        Self::new(
            LatLng::new(center.lat - dlat, center.lng - dlng),
            LatLng::new(center.lat + dlat, center.lng + dlng),
            center,
        )
    }

    #[must_use]
    pub const fn low(&self) -> LatLng {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> LatLng {
        self.high
    }

    #[must_use]
    pub const fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn contains_point(&self, point: LatLng) -> bool {
        point.lat >= self.low.lat
            && point.lat <= self.high.lat
            && point.lng >= self.low.lng
            && point.lng <= self.high.lng
    }

    /// True when `other` lies entirely within `self` (edges may touch).
    #[must_use]
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.contains_point(other.low) && self.contains_point(other.high)
    }

    /// Intersects `self` with `outer`, keeping the original centre.
    ///
    /// The centre must lie inside `outer` for the result to be non-empty; when
    /// it does not, the corners collapse onto the nearest edge of `outer`.
    #[must_use]
    pub fn clamp_to(&self, outer: &BoundingBox) -> Self {
        let clamp_lat = |v: f64| v.clamp(outer.low.lat, outer.high.lat);
        let clamp_lng = |v: f64| v.clamp(outer.low.lng, outer.high.lng);
        Self::new(
            LatLng::new(clamp_lat(self.low.lat), clamp_lng(self.low.lng)),
            LatLng::new(clamp_lat(self.high.lat), clamp_lng(self.high.lng)),
            self.center,
        )
    }

    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.high.lat - self.low.lat
    }

    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.high.lng - self.low.lng
    }
}

/// One sample coordinate of a search grid.
///
/// `row` and `col` are 1-based and only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub lat: f64,
    pub lng: f64,
    pub row: usize,
    pub col: usize,
}

impl GridPoint {
    #[must_use]
    pub const fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Diagnostic label such as `"2x3"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}x{}", self.row, self.col)
    }
}
