//! Service area query activities

use sqlx::PgConnection;
use tracing::info;

use crate::common::{ApiError, ApiResult, Page, ServiceAreaId};
use crate::config::CoordinateOrder;
use crate::domains::service_areas::geolocation::{find_areas_containing, LocationMatch};
use crate::domains::service_areas::models::{ServiceArea, ServiceAreaWithProvider};

/// Get a single service area (with its provider) by ID
pub async fn get_service_area(
    id: ServiceAreaId,
    conn: &mut PgConnection,
) -> ApiResult<ServiceAreaWithProvider> {
    info!(service_area_id = %id, "Getting service area");

    ServiceArea::find_with_provider(id, conn)
        .await?
        .ok_or_else(|| ApiError::not_found("Service area not found"))
}

/// List service areas ordered by id
pub async fn list_service_areas(
    page: Page,
    conn: &mut PgConnection,
) -> ApiResult<Vec<ServiceAreaWithProvider>> {
    info!(offset = page.offset, limit = page.limit, "Listing service areas");

    Ok(ServiceArea::find_page_with_provider(&page, conn).await?)
}

/// Find the service areas containing a point.
///
/// Scans every stored area; see [`find_areas_containing`] for the
/// containment rules.
pub async fn get_service_areas_by_location(
    lat: f64,
    lng: f64,
    order: CoordinateOrder,
    conn: &mut PgConnection,
) -> ApiResult<Vec<LocationMatch>> {
    let areas = ServiceArea::find_all_with_provider(conn).await?;

    let matches = find_areas_containing(lat, lng, &areas, order);

    info!(
        lat,
        lng,
        scanned = areas.len(),
        matched = matches.len(),
        "Located service areas"
    );

    Ok(matches)
}
