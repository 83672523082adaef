//! Turns a free-text location into a search bounding box.

use placegrid_core::BoundingBox;

use crate::api::PlacesApi;
use crate::error::ResolveError;

/// Geocodes `location` and returns the first result's viewport, centred on
/// the result's reported location.
///
/// # Errors
///
/// - [`ResolveError::Network`] when the geocoder cannot be reached or its
///   response cannot be parsed.
/// - [`ResolveError::NotFound`] for any status other than `OK`, or an `OK`
///   answer with no results.
pub async fn resolve_bounds<A>(api: &A, location: &str) -> Result<BoundingBox, ResolveError>
where
    A: PlacesApi + ?Sized,
{
    let response = api.geocode(location).await?;

    if !response.status.is_ok() {
        return Err(ResolveError::NotFound {
            status: response.status.to_string(),
            message: response
                .error_message
                .unwrap_or_else(|| "no error message".to_string()),
        });
    }

    let Some(first) = response.results.into_iter().next() else {
        return Err(ResolveError::NotFound {
            status: "OK".to_string(),
            message: "geocoder returned no results".to_string(),
        });
    };

    let geometry = first.geometry;
    let bounds = BoundingBox::new(
        geometry.viewport.southwest,
        geometry.viewport.northeast,
        geometry.location,
    );
    tracing::info!(
        location,
        resolved = first.formatted_address.as_deref().unwrap_or(""),
        low = %bounds.low(),
        high = %bounds.high(),
        "location resolved"
    );
    Ok(bounds)
}
