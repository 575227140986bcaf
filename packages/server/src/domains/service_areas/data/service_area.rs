use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::common::validation::{require_finite, require_non_empty};
use crate::common::{ApiError, ProviderId, ServiceAreaId};
use crate::domains::providers::data::ProviderData;
use crate::domains::service_areas::models::{
    CreateServiceArea, ServiceAreaWithProvider, UpdateServiceArea,
};

/// Service area as returned by the API, with its provider embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAreaData {
    pub id: ServiceAreaId,
    pub name: String,
    pub price: f64,
    pub geojson: Option<JsonValue>,
    pub provider_id: ProviderId,
    pub provider: ProviderData,
}

impl From<ServiceAreaWithProvider> for ServiceAreaData {
    fn from(row: ServiceAreaWithProvider) -> Self {
        let provider = ProviderData::from(row.provider());
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            geojson: row.geojson,
            provider_id: row.provider_id,
            provider,
        }
    }
}

/// Body of `POST /service-areas/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceAreaInput {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub geojson: Option<JsonValue>,
    pub provider_id: ProviderId,
}

impl TryFrom<CreateServiceAreaInput> for CreateServiceArea {
    type Error = ApiError;

    fn try_from(input: CreateServiceAreaInput) -> Result<Self, Self::Error> {
        require_non_empty("name", &input.name)?;
        require_finite("price", input.price)?;
        if let Some(geojson) = &input.geojson {
            require_geojson_object(geojson)?;
        }

        Ok(Self {
            name: input.name,
            price: input.price,
            geojson: input.geojson,
            provider_id: input.provider_id,
        })
    }
}

/// Body of `PUT /service-areas/{id}`; any subset of fields.
///
/// `geojson` distinguishes "absent" (keep) from `null` (clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceAreaInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub geojson: Option<Option<JsonValue>>,
    #[serde(default)]
    pub provider_id: Option<ProviderId>,
}

impl TryFrom<UpdateServiceAreaInput> for UpdateServiceArea {
    type Error = ApiError;

    fn try_from(input: UpdateServiceAreaInput) -> Result<Self, Self::Error> {
        if let Some(name) = &input.name {
            require_non_empty("name", name)?;
        }
        if let Some(price) = input.price {
            require_finite("price", price)?;
        }
        if let Some(Some(geojson)) = &input.geojson {
            require_geojson_object(geojson)?;
        }

        Ok(Self {
            name: input.name,
            price: input.price,
            geojson: input.geojson,
            provider_id: input.provider_id,
        })
    }
}

/// Query of `GET /service-areas/locations/`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lng: f64,
}

impl LocationQuery {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_finite("lat", self.lat)?;
        require_finite("lng", self.lng)
    }
}

/// Stored geometry is opaque, but it must at least be a JSON object
fn require_geojson_object(value: &JsonValue) -> Result<(), ApiError> {
    if !value.is_object() {
        return Err(ApiError::validation("geojson must be a JSON object"));
    }
    Ok(())
}

/// Present-but-null deserializes to `Some(None)`; absence is handled by
/// `#[serde(default)]`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<JsonValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<JsonValue>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_distinguishes_absent_and_null_geojson() {
        let absent: UpdateServiceAreaInput = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert_eq!(absent.geojson, None);

        let null: UpdateServiceAreaInput = serde_json::from_str(r#"{"geojson": null}"#).unwrap();
        assert_eq!(null.geojson, Some(None));

        let set: UpdateServiceAreaInput =
            serde_json::from_str(r#"{"geojson": {"type": "Polygon", "coordinates": []}}"#)
                .unwrap();
        assert!(matches!(set.geojson, Some(Some(_))));
    }

    #[test]
    fn create_rejects_string_geojson() {
        let input = CreateServiceAreaInput {
            name: "Area".to_string(),
            price: 10.0,
            geojson: Some(json!(
                r#"{"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}"#
            )),
            provider_id: ProviderId::from_raw(1),
        };
        assert!(matches!(
            CreateServiceArea::try_from(input),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn create_accepts_negative_price() {
        let input = CreateServiceAreaInput {
            name: "Discount".to_string(),
            price: -1.0,
            geojson: None,
            provider_id: ProviderId::from_raw(1),
        };
        assert_eq!(CreateServiceArea::try_from(input).unwrap().price, -1.0);
    }

    #[test]
    fn update_rejects_non_finite_price() {
        let input = UpdateServiceAreaInput {
            price: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(matches!(
            UpdateServiceArea::try_from(input),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn create_body_parses_with_integer_ids() {
        let input: CreateServiceAreaInput = serde_json::from_value(json!({
            "name": "Area",
            "price": 10,
            "geojson": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]},
            "provider_id": 3
        }))
        .unwrap();

        let create = CreateServiceArea::try_from(input).unwrap();
        assert_eq!(create.provider_id, ProviderId::from_raw(3));
        assert_eq!(create.price, 10.0);
    }

    #[test]
    fn location_query_rejects_non_finite_values() {
        assert!(LocationQuery { lat: f64::NAN, lng: 0.0 }.validate().is_err());
        assert!(LocationQuery { lat: 0.5, lng: 0.5 }.validate().is_ok());
    }
}
