//! Details lookups that turn bare ids into [`EnrichedEntity`] records.

use placegrid_core::{EnrichedEntity, SearchResult};
use placegrid_places::PlaceDetails;

use crate::api::PlacesApi;
use crate::progress::{ProgressEvent, ProgressObserver};
use crate::settings::{pause, SearchSettings};

/// Fetches details for one entity.
///
/// Returns `None` when the call fails or the API answers with a non-`OK`
/// status; the caller drops that entity and carries on. An `OK` answer
/// without a result body still yields a record carrying only the id.
pub async fn fetch_details<A>(
    api: &A,
    settings: &SearchSettings,
    entity_id: &str,
) -> Option<EnrichedEntity>
where
    A: PlacesApi + ?Sized,
{
    pause(settings.details_delay).await;

    let response = match api.place_details(entity_id).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(entity_id, error = %err, "details request failed");
            return None;
        }
    };

    if !response.status.is_ok() {
        tracing::warn!(
            entity_id,
            status = %response.status,
            error_message = response.error_message.as_deref().unwrap_or(""),
            "details lookup returned non-OK status"
        );
        return None;
    }

    Some(to_entity(entity_id, response.result.unwrap_or_default()))
}

/// Enriches `results` in order, one request at a time.
///
/// The output preserves input order minus any entity whose lookup failed.
pub async fn enrich_all<A>(
    api: &A,
    settings: &SearchSettings,
    observer: &dyn ProgressObserver,
    results: &[SearchResult],
) -> Vec<EnrichedEntity>
where
    A: PlacesApi + ?Sized,
{
    let total = results.len();
    let mut enriched = Vec::with_capacity(total);

    for (idx, result) in results.iter().enumerate() {
        observer.on_event(&ProgressEvent::DetailsProgress {
            index: idx + 1,
            total,
        });
        if let Some(entity) = fetch_details(api, settings, &result.entity_id).await {
            enriched.push(entity);
        }
    }

    let dropped = total - enriched.len();
    if dropped > 0 {
        tracing::warn!(dropped, total, "some entities could not be enriched");
    }
    enriched
}

fn to_entity(entity_id: &str, details: PlaceDetails) -> EnrichedEntity {
    let location = details.location();
    EnrichedEntity {
        entity_id: entity_id.to_string(),
        name: details.name,
        address: details.formatted_address,
        phone: details.international_phone_number,
        website: details.website,
        lat: location.map(|l| l.lat),
        lng: location.map(|l| l.lng),
        rating: details.rating,
        rating_count: details.user_ratings_total,
        categories: details.types,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use placegrid_core::LatLng;
    use placegrid_places::{ApiStatus, DetailsGeometry, DetailsResponse};
    use tokio::time::Instant;

    use super::*;
    use crate::test_support::{details_ok, transport_error, FakeApi};

    fn full_details() -> PlaceDetails {
        PlaceDetails {
            name: Some("Cotillon Rosa".to_string()),
            formatted_address: Some("Av. Cabildo 2000, CABA".to_string()),
            international_phone_number: Some("+54 11 4781-0000".to_string()),
            website: Some("https://facebook.com/cotillonrosa".to_string()),
            geometry: Some(DetailsGeometry {
                location: Some(LatLng::new(-34.56, -58.45)),
            }),
            rating: Some(4.2),
            user_ratings_total: Some(87),
            types: vec!["store".to_string()],
        }
    }

    #[tokio::test]
    async fn maps_every_upstream_field() {
        let api = FakeApi::new().with_details(|_| Ok(details_ok(full_details())));
        let settings = SearchSettings::without_delays(60);

        let entity = fetch_details(&api, &settings, "p1").await.unwrap();

        assert_eq!(entity.entity_id, "p1");
        assert_eq!(entity.name.as_deref(), Some("Cotillon Rosa"));
        assert_eq!(entity.address.as_deref(), Some("Av. Cabildo 2000, CABA"));
        assert_eq!(entity.phone.as_deref(), Some("+54 11 4781-0000"));
        assert_eq!(entity.lat, Some(-34.56));
        assert_eq!(entity.lng, Some(-58.45));
        assert_eq!(entity.rating, Some(4.2));
        assert_eq!(entity.rating_count, Some(87));
        assert_eq!(entity.categories, vec!["store"]);
        assert_eq!(entity.website_kind(), placegrid_core::WebsiteKind::Facebook);
    }

    #[tokio::test]
    async fn ok_without_result_keeps_only_the_id() {
        let api = FakeApi::new().with_details(|_| {
            Ok(DetailsResponse {
                status: ApiStatus::Ok,
                result: None,
                error_message: None,
            })
        });
        let settings = SearchSettings::without_delays(60);

        let entity = fetch_details(&api, &settings, "p1").await.unwrap();

        assert_eq!(
            entity,
            EnrichedEntity {
                entity_id: "p1".to_string(),
                ..EnrichedEntity::default()
            }
        );
    }

    #[tokio::test]
    async fn non_ok_status_and_transport_error_yield_none() {
        let settings = SearchSettings::without_delays(60);

        let denied = FakeApi::new();
        assert!(fetch_details(&denied, &settings, "p1").await.is_none());

        let broken = FakeApi::new().with_details(|_| Err(transport_error()));
        assert!(fetch_details(&broken, &settings, "p1").await.is_none());
    }

    #[tokio::test]
    async fn enrich_all_drops_failures_and_keeps_order() {
        let api = FakeApi::new().with_details(|id| {
            if id == "bad" {
                Err(transport_error())
            } else {
                Ok(details_ok(PlaceDetails {
                    name: Some(id.to_uppercase()),
                    ..PlaceDetails::default()
                }))
            }
        });
        let settings = SearchSettings::without_delays(60);
        let events = Mutex::new(Vec::new());
        let observer = |e: &ProgressEvent| events.lock().unwrap().push(e.clone());
        let results = vec![
            SearchResult::new("a"),
            SearchResult::new("bad"),
            SearchResult::new("c"),
        ];

        let enriched = enrich_all(&api, &settings, &observer, &results).await;

        let ids: Vec<&str> = enriched.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(enriched[1].name.as_deref(), Some("C"));
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                ProgressEvent::DetailsProgress { index: 1, total: 3 },
                ProgressEvent::DetailsProgress { index: 2, total: 3 },
                ProgressEvent::DetailsProgress { index: 3, total: 3 },
            ]
        );
        assert_eq!(*api.details_calls.lock().unwrap(), vec!["a", "bad", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn details_delay_precedes_every_lookup() {
        let api = FakeApi::new().with_details(|_| Ok(details_ok(PlaceDetails::default())));
        let settings = SearchSettings {
            details_delay: Duration::from_millis(50),
            ..SearchSettings::without_delays(60)
        };
        let results = vec![
            SearchResult::new("a"),
            SearchResult::new("b"),
            SearchResult::new("c"),
        ];
        let started = Instant::now();

        let enriched = enrich_all(&api, &settings, &crate::NoopObserver, &results).await;

        let elapsed = started.elapsed();
        assert_eq!(enriched.len(), 3);
        assert!(elapsed >= Duration::from_millis(150), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(200), "elapsed {elapsed:?}");
    }
}
