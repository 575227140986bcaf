//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly, bypassing HTTP.

use anyhow::Result;
use serde_json::{json, Value};
use service_areas_core::common::{ProviderId, ServiceAreaId};
use service_areas_core::domains::providers::models::{CreateProvider, Provider};
use service_areas_core::domains::service_areas::models::{CreateServiceArea, ServiceArea};
use sqlx::PgPool;

/// Polygon with corners (0,0), (1,0), (1,1), (0,1)
pub fn unit_square() -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
    })
}

/// Request body for a provider with the given name and email
pub fn provider_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "phone_number": "555-0100",
        "language": "en",
        "currency": "USD"
    })
}

/// Insert a provider
pub async fn create_test_provider(pool: &PgPool, name: &str, email: &str) -> Result<ProviderId> {
    let mut conn = pool.acquire().await?;
    let provider = Provider::create(
        CreateProvider {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: "555-0100".to_string(),
            language: "en".to_string(),
            currency: "USD".to_string(),
        },
        &mut conn,
    )
    .await?;

    Ok(provider.id)
}

/// Insert a service area
pub async fn create_test_service_area(
    pool: &PgPool,
    provider_id: ProviderId,
    name: &str,
    price: f64,
    geojson: Option<Value>,
) -> Result<ServiceAreaId> {
    let mut conn = pool.acquire().await?;
    let area = ServiceArea::create(
        CreateServiceArea {
            name: name.to_string(),
            price,
            geojson,
            provider_id,
        },
        &mut conn,
    )
    .await?;

    Ok(area.id)
}

pub async fn count_providers(pool: &PgPool) -> Result<i64> {
    let mut conn = pool.acquire().await?;
    Provider::count(&mut conn).await
}

pub async fn count_service_areas(pool: &PgPool) -> Result<i64> {
    let mut conn = pool.acquire().await?;
    ServiceArea::count(&mut conn).await
}
