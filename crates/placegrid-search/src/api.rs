//! The seam between the search engine and the upstream places service.

use async_trait::async_trait;
use placegrid_core::LatLng;
use placegrid_places::{
    DetailsResponse, GeocodeResponse, PlacesClient, PlacesError, TextSearchResponse,
};

/// The three upstream calls the engine depends on.
///
/// [`PlacesClient`] is the production implementation; tests substitute
/// in-process fixtures.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<GeocodeResponse, PlacesError>;

    async fn text_search_page(
        &self,
        query: &str,
        location: LatLng,
        radius_m: u32,
        page_token: Option<&str>,
    ) -> Result<TextSearchResponse, PlacesError>;

    async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, PlacesError>;
}

#[async_trait]
impl PlacesApi for PlacesClient {
    async fn geocode(&self, address: &str) -> Result<GeocodeResponse, PlacesError> {
        PlacesClient::geocode(self, address).await
    }

    async fn text_search_page(
        &self,
        query: &str,
        location: LatLng,
        radius_m: u32,
        page_token: Option<&str>,
    ) -> Result<TextSearchResponse, PlacesError> {
        PlacesClient::text_search_page(self, query, location, radius_m, page_token).await
    }

    async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, PlacesError> {
        PlacesClient::place_details(self, place_id).await
    }
}
