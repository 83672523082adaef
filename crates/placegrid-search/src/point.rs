//! Paginated, capped text search from a single grid point.

use placegrid_core::{LatLng, SearchOutcome, SearchResult};
use placegrid_places::MAX_SEARCH_RADIUS_M;

use crate::api::PlacesApi;
use crate::registry::DedupRegistry;
use crate::settings::{pause, SearchSettings};

/// Pages requested from one point before giving up on further tokens.
/// The upstream API stops issuing tokens well before this; the guard only
/// matters if it ever cycles.
pub const MAX_PAGES_PER_POINT: usize = 10;

/// Searches `query` around `location`, following continuation tokens.
///
/// Every id is checked against `registry` before it is kept, so an entity
/// already found anywhere in the run is never returned again. Stops with
/// `limit_reached = true` as soon as `settings.max_unique_per_point` new ids
/// have been collected from this point.
///
/// Failures are local: a transport error or an unexpected page status ends
/// pagination for this point and returns whatever was collected so far.
pub async fn search_from_point<A>(
    api: &A,
    registry: &mut DedupRegistry,
    settings: &SearchSettings,
    query: &str,
    location: LatLng,
    radius_m: u32,
) -> SearchOutcome
where
    A: PlacesApi + ?Sized,
{
    let radius_m = radius_m.min(MAX_SEARCH_RADIUS_M);
    let mut outcome = SearchOutcome::default();
    let mut page_token: Option<String> = None;

    for page in 1..=MAX_PAGES_PER_POINT {
        pause(settings.request_delay).await;
        if page_token.is_some() {
            pause(settings.page_token_delay).await;
        }

        let response = match api
            .text_search_page(query, location, radius_m, page_token.as_deref())
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    lat = location.lat,
                    lng = location.lng,
                    page,
                    error = %err,
                    "text search page failed; keeping partial results"
                );
                return outcome;
            }
        };

        if !response.status.is_acceptable_page() {
            tracing::warn!(
                lat = location.lat,
                lng = location.lng,
                page,
                status = %response.status,
                error_message = response.error_message.as_deref().unwrap_or(""),
                "unexpected text search status; halting pagination"
            );
            return outcome;
        }

        outcome.raw_count += response.results.len();

        for row in response.results {
            let Some(entity_id) = row.place_id.filter(|id| !id.is_empty()) else {
                continue;
            };
            if !registry.insert(&entity_id) {
                continue;
            }
            outcome.unique_entities.push(SearchResult::new(entity_id));

            if outcome.unique_entities.len() >= settings.max_unique_per_point {
                outcome.limit_reached = true;
                return outcome;
            }
        }

        match response.next_page_token {
            Some(token) => page_token = Some(token),
            None => return outcome,
        }
    }

    tracing::warn!(
        lat = location.lat,
        lng = location.lng,
        max_pages = MAX_PAGES_PER_POINT,
        "pagination guard reached; stopping"
    );
    outcome
}
