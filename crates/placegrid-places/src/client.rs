//! HTTP client for the places web-service API.
//!
//! Wraps `reqwest` with API key management, endpoint URL construction and
//! typed response deserialization. The client does not interpret envelope
//! `status` values and never retries: a transport failure or non-2xx HTTP
//! status surfaces as [`PlacesError::Http`] and the caller decides whether it
//! is fatal.

use std::time::Duration;

use placegrid_core::config::DEFAULT_API_BASE_URL;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::types::GeocodeResponse;

const GEOCODE_PATH: &str = "maps/api/geocode/json";
const TEXT_SEARCH_PATH: &str = "maps/api/place/textsearch/json";
const DETAILS_PATH: &str = "maps/api/place/details/json";

/// Largest `radius` the text-search endpoint accepts, in metres.
pub const MAX_SEARCH_RADIUS_M: u32 = 50_000;

/// Field mask requested from the details endpoint.
pub const DETAILS_FIELDS: &str = "name,formatted_address,international_phone_number,website,geometry,rating,user_ratings_total,types";

/// Client for the places web-service API.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    pub(crate) geocode_url: Url,
    pub(crate) text_search_url: Url,
    pub(crate) details_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_API_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: a single trailing slash makes `Url::join` append the
        // endpoint path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid_base_url(base_url, e))?;
        if base.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            geocode_url: base
                .join(GEOCODE_PATH)
                .map_err(|e| invalid_base_url(base_url, e))?,
            text_search_url: base
                .join(TEXT_SEARCH_PATH)
                .map_err(|e| invalid_base_url(base_url, e))?,
            details_url: base
                .join(DETAILS_PATH)
                .map_err(|e| invalid_base_url(base_url, e))?,
        })
    }

    /// Geocodes a free-text address.
    ///
    /// The envelope is returned as-is; a non-`OK` status is data, not an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResponse, PlacesError> {
        let url = self.build_url(&self.geocode_url, &[("address", address)]);
        tracing::debug!(address, "geocode request");
        self.get_json(&url, || format!("geocode(address={address})"))
            .await
    }

    /// Builds the full request URL with percent-encoded query parameters.
    ///
    /// Appends `extra` first and the API key last.
    pub(crate) fn build_url(&self, endpoint: &Url, extra: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    ///
    /// `context` is only evaluated on a parse failure and must not include the
    /// API key.
    pub(crate) async fn get_json<T, C>(&self, url: &Url, context: C) -> Result<T, PlacesError>
    where
        T: DeserializeOwned,
        C: FnOnce() -> String,
    {
        // Strip the URL from transport errors: it carries the API key.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context(),
            source: e,
        })
    }
}

fn invalid_base_url(url: &str, reason: impl std::fmt::Display) -> PlacesError {
    PlacesError::InvalidBaseUrl {
        url: url.to_owned(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
