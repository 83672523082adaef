//! Typed client for the geocoding, text-search and place-details endpoints.

pub mod client;
pub mod error;
mod places;
pub mod types;

pub use client::{PlacesClient, DETAILS_FIELDS, MAX_SEARCH_RADIUS_M};
pub use error::PlacesError;
pub use types::{
    ApiStatus, DetailsGeometry, DetailsResponse, GeocodeGeometry, GeocodeResponse, GeocodeResult,
    PlaceDetails, TextSearchResponse, TextSearchRow, Viewport,
};
