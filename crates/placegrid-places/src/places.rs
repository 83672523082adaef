//! Text-search and place-details endpoints.

use placegrid_core::LatLng;

use crate::client::{PlacesClient, DETAILS_FIELDS};
use crate::error::PlacesError;
use crate::types::{DetailsResponse, TextSearchResponse};

impl PlacesClient {
    /// Fetches one page of text-search results around `location`.
    ///
    /// Pass the previous page's `next_page_token` as `page_token` to fetch the
    /// following page. The caller is responsible for waiting until a fresh
    /// token becomes valid upstream.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn text_search_page(
        &self,
        query: &str,
        location: LatLng,
        radius_m: u32,
        page_token: Option<&str>,
    ) -> Result<TextSearchResponse, PlacesError> {
        let location_param = location.to_string();
        let radius_param = radius_m.to_string();
        let mut params = vec![
            ("query", query),
            ("location", location_param.as_str()),
            ("radius", radius_param.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let url = self.build_url(&self.text_search_url, &params);
        tracing::debug!(
            query,
            location = %location_param,
            radius_m,
            has_token = page_token.is_some(),
            "text search request"
        );
        self.get_json(&url, || {
            format!("textsearch(query={query}, location={location_param})")
        })
        .await
    }

    /// Fetches the [`DETAILS_FIELDS`] attributes of one place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, PlacesError> {
        let url = self.build_url(
            &self.details_url,
            &[("place_id", place_id), ("fields", DETAILS_FIELDS)],
        );
        self.get_json(&url, || format!("details(place_id={place_id})"))
            .await
    }
}
