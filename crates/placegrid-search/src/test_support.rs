//! In-process `PlacesApi` fixtures for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use placegrid_core::LatLng;
use placegrid_places::{
    ApiStatus, DetailsResponse, GeocodeResponse, PlaceDetails, PlacesError, TextSearchResponse,
    TextSearchRow,
};

use crate::api::PlacesApi;

type SearchFn =
    dyn Fn(LatLng, Option<&str>) -> Result<TextSearchResponse, PlacesError> + Send + Sync;
type DetailsFn = dyn Fn(&str) -> Result<DetailsResponse, PlacesError> + Send + Sync;
type GeocodeFn = dyn Fn(&str) -> Result<GeocodeResponse, PlacesError> + Send + Sync;

pub(crate) fn page(ids: &[&str], token: Option<&str>) -> TextSearchResponse {
    TextSearchResponse {
        status: ApiStatus::Ok,
        results: ids
            .iter()
            .map(|id| TextSearchRow {
                place_id: Some((*id).to_string()),
                name: None,
            })
            .collect(),
        next_page_token: token.map(str::to_string),
        error_message: None,
    }
}

pub(crate) fn status_page(status: &str) -> TextSearchResponse {
    TextSearchResponse {
        status: ApiStatus::from(status.to_string()),
        results: Vec::new(),
        next_page_token: None,
        error_message: Some(format!("{status} from fixture")),
    }
}

pub(crate) fn details_ok(details: PlaceDetails) -> DetailsResponse {
    DetailsResponse {
        status: ApiStatus::Ok,
        result: Some(details),
        error_message: None,
    }
}

/// A deserialize failure, the cheapest `PlacesError` to build offline.
pub(crate) fn transport_error() -> PlacesError {
    let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    PlacesError::Deserialize {
        context: "fixture".to_string(),
        source,
    }
}

pub(crate) struct FakeApi {
    search: Box<SearchFn>,
    details: Box<DetailsFn>,
    geocode: Box<GeocodeFn>,
    pub search_calls: Mutex<Vec<(LatLng, u32, Option<String>)>>,
    pub details_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self {
            search: Box::new(|_, _| Ok(status_page("ZERO_RESULTS"))),
            details: Box::new(|_| {
                Ok(DetailsResponse {
                    status: ApiStatus::from("NOT_FOUND".to_string()),
                    result: None,
                    error_message: None,
                })
            }),
            geocode: Box::new(|_| {
                Ok(GeocodeResponse {
                    status: ApiStatus::ZeroResults,
                    results: Vec::new(),
                    error_message: None,
                })
            }),
            search_calls: Mutex::new(Vec::new()),
            details_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_search<F>(mut self, f: F) -> Self
    where
        F: Fn(LatLng, Option<&str>) -> Result<TextSearchResponse, PlacesError>
            + Send
            + Sync
            + 'static,
    {
        self.search = Box::new(f);
        self
    }

    pub(crate) fn with_details<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<DetailsResponse, PlacesError> + Send + Sync + 'static,
    {
        self.details = Box::new(f);
        self
    }

    pub(crate) fn with_geocode<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<GeocodeResponse, PlacesError> + Send + Sync + 'static,
    {
        self.geocode = Box::new(f);
        self
    }

    pub(crate) fn search_count(&self) -> usize {
        self.search_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PlacesApi for FakeApi {
    async fn geocode(&self, address: &str) -> Result<GeocodeResponse, PlacesError> {
        (self.geocode)(address)
    }

    async fn text_search_page(
        &self,
        _query: &str,
        location: LatLng,
        radius_m: u32,
        page_token: Option<&str>,
    ) -> Result<TextSearchResponse, PlacesError> {
        self.search_calls
            .lock()
            .unwrap()
            .push((location, radius_m, page_token.map(str::to_string)));
        (self.search)(location, page_token)
    }

    async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, PlacesError> {
        self.details_calls.lock().unwrap().push(place_id.to_string());
        (self.details)(place_id)
    }
}
