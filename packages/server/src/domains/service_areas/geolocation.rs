//! Point-in-area lookup over stored GeoJSON.
//!
//! Containment follows the DE-9IM `contains` predicate as implemented by the
//! `geo` crate: a point on an area's boundary (edge or vertex) is *not*
//! contained. Geometries are parsed on every call; there is no index or cache.

use geo::{Contains, Geometry, Point};
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::config::CoordinateOrder;
use crate::domains::service_areas::models::ServiceAreaWithProvider;

/// A service area containing the queried point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMatch {
    pub name: String,
    pub provider_name: String,
    pub price: f64,
}

/// Parse a stored GeoJSON object (geometry, Feature or FeatureCollection).
pub fn parse_geometry(value: &JsonValue) -> Result<Geometry<f64>, geojson::Error> {
    let geojson = GeoJson::from_json_value(value.clone())?;
    Geometry::<f64>::try_from(geojson)
}

/// Build the query point for `lat`/`lng` under the configured axis order.
pub fn query_point(lat: f64, lng: f64, order: CoordinateOrder) -> Point<f64> {
    let (x, y) = order.to_xy(lat, lng);
    Point::new(x, y)
}

/// Return every area whose geometry contains the point, in iteration order.
///
/// Areas without a geometry are skipped. Areas whose geometry does not parse
/// are skipped with a warning.
pub fn find_areas_containing(
    lat: f64,
    lng: f64,
    areas: &[ServiceAreaWithProvider],
    order: CoordinateOrder,
) -> Vec<LocationMatch> {
    let point = query_point(lat, lng, order);

    areas
        .iter()
        .filter(|area| {
            let Some(geojson) = &area.geojson else {
                return false;
            };
            match parse_geometry(geojson) {
                Ok(shape) => shape.contains(&point),
                Err(e) => {
                    tracing::warn!(
                        service_area_id = %area.id,
                        error = %e,
                        "Skipping service area with invalid geometry"
                    );
                    false
                }
            }
        })
        .map(|area| LocationMatch {
            name: area.name.clone(),
            provider_name: area.provider_name.clone(),
            price: area.price,
        })
        .collect()
}
