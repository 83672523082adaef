//! Run-aborting errors and geocoding failures.

use placegrid_places::PlacesError;
use thiserror::Error;

/// Why a free-text location could not be turned into a bounding box.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The geocoder answered, but not with a usable result.
    #[error("geocoder returned {status}: {message}")]
    NotFound { status: String, message: String },

    /// The geocoder could not be reached or answered garbage.
    #[error("geocoding request failed: {0}")]
    Network(#[from] PlacesError),
}

/// Errors that abort a whole run.
///
/// Per-point and per-entity failures never appear here; they are logged and
/// absorbed where they happen.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("could not resolve location \"{location}\": {source}")]
    Resolution {
        location: String,
        #[source]
        source: ResolveError,
    },
}
