//! Places API response types.
//!
//! Every endpoint wraps its payload in a `{"status": "...", ...}` envelope.
//! Fields the API may omit are `Option` or default to empty so a sparse
//! response never fails to deserialize.

use placegrid_core::LatLng;
use serde::Deserialize;

/// The envelope `status` string.
///
/// Only `OK` and `ZERO_RESULTS` get dedicated variants; everything else
/// (`OVER_QUERY_LIMIT`, `REQUEST_DENIED`, `INVALID_REQUEST`, ...) is kept
/// verbatim in [`ApiStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ApiStatus {
    Ok,
    ZeroResults,
    Other(String),
}

impl ApiStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// `OK` or `ZERO_RESULTS`: the two statuses a search page may carry
    /// without halting pagination.
    #[must_use]
    pub fn is_acceptable_page(&self) -> bool {
        matches!(self, Self::Ok | Self::ZeroResults)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ApiStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            _ => Self::Other(value),
        }
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: GeocodeGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeGeometry {
    pub location: LatLng,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Viewport {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

// ---------------------------------------------------------------------------
// textsearch
// ---------------------------------------------------------------------------

/// One page of text-search results.
#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub results: Vec<TextSearchRow>,
    /// Continuation token for the next page; absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchRow {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// The `result` record of a details call, limited to the requested fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub geometry: Option<DetailsGeometry>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailsGeometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

impl PlaceDetails {
    #[must_use]
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}
