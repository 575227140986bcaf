use anyhow::Result;
use serde_json::Value as JsonValue;
use sqlx::PgConnection;

use crate::common::{Page, ProviderId, ServiceAreaId};
use crate::domains::providers::models::Provider;

/// Geographic area served by a provider (GeoJSON geometry + price)
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ServiceArea {
    pub id: ServiceAreaId,
    pub name: String,
    pub price: f64,
    pub geojson: Option<JsonValue>,
    pub provider_id: ProviderId,
}

/// Service area joined with the columns of its owning provider
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ServiceAreaWithProvider {
    pub id: ServiceAreaId,
    pub name: String,
    pub price: f64,
    pub geojson: Option<JsonValue>,
    pub provider_id: ProviderId,
    pub provider_name: String,
    pub provider_email: String,
    pub provider_phone_number: String,
    pub provider_language: String,
    pub provider_currency: String,
}

impl ServiceAreaWithProvider {
    pub fn provider(&self) -> Provider {
        Provider {
            id: self.provider_id,
            name: self.provider_name.clone(),
            email: self.provider_email.clone(),
            phone_number: self.provider_phone_number.clone(),
            language: self.provider_language.clone(),
            currency: self.provider_currency.clone(),
        }
    }
}

/// Input for creating a new service area
#[derive(Debug, Clone)]
pub struct CreateServiceArea {
    pub name: String,
    pub price: f64,
    pub geojson: Option<JsonValue>,
    pub provider_id: ProviderId,
}

/// Partial update for a service area. `None` leaves the column untouched;
/// `geojson: Some(None)` clears the stored geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateServiceArea {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub geojson: Option<Option<JsonValue>>,
    pub provider_id: Option<ProviderId>,
}

impl UpdateServiceArea {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Copy every supplied field onto `area`.
    pub fn apply(self, area: &mut ServiceArea) {
        if let Some(name) = self.name {
            area.name = name;
        }
        if let Some(price) = self.price {
            area.price = price;
        }
        if let Some(geojson) = self.geojson {
            area.geojson = geojson;
        }
        if let Some(provider_id) = self.provider_id {
            area.provider_id = provider_id;
        }
    }
}

/// Build a `SELECT` over service areas joined with their provider
fn select_with_provider(tail: &str) -> String {
    format!(
        r#"
        SELECT
            sa.id, sa.name, sa.price, sa.geojson, sa.provider_id,
            p.name AS provider_name,
            p.email AS provider_email,
            p.phone_number AS provider_phone_number,
            p.language AS provider_language,
            p.currency AS provider_currency
        FROM service_areas sa
        JOIN providers p ON p.id = sa.provider_id
        {}
        "#,
        tail
    )
}

impl ServiceArea {
    /// Find service area by ID, returning None if not found
    pub async fn find_by_id_optional(
        id: ServiceAreaId,
        conn: &mut PgConnection,
    ) -> Result<Option<Self>> {
        let area = sqlx::query_as::<_, Self>("SELECT * FROM service_areas WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(area)
    }

    /// Find service area by ID and lock the row until the session ends
    pub async fn find_by_id_for_update(
        id: ServiceAreaId,
        conn: &mut PgConnection,
    ) -> Result<Option<Self>> {
        let area =
            sqlx::query_as::<_, Self>("SELECT * FROM service_areas WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(area)
    }

    /// Find a service area together with its provider
    pub async fn find_with_provider(
        id: ServiceAreaId,
        conn: &mut PgConnection,
    ) -> Result<Option<ServiceAreaWithProvider>> {
        let sql = select_with_provider("WHERE sa.id = $1");
        let area = sqlx::query_as::<_, ServiceAreaWithProvider>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(area)
    }

    /// Find one page of service areas with their providers, oldest first
    pub async fn find_page_with_provider(
        page: &Page,
        conn: &mut PgConnection,
    ) -> Result<Vec<ServiceAreaWithProvider>> {
        let sql = select_with_provider("ORDER BY sa.id ASC LIMIT $1 OFFSET $2");
        let areas = sqlx::query_as::<_, ServiceAreaWithProvider>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&mut *conn)
            .await?;
        Ok(areas)
    }

    /// Load every service area with its provider, oldest first
    pub async fn find_all_with_provider(
        conn: &mut PgConnection,
    ) -> Result<Vec<ServiceAreaWithProvider>> {
        let sql = select_with_provider("ORDER BY sa.id ASC");
        let areas = sqlx::query_as::<_, ServiceAreaWithProvider>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(areas)
    }

    pub async fn find_by_provider(
        provider_id: ProviderId,
        conn: &mut PgConnection,
    ) -> Result<Vec<Self>> {
        let areas = sqlx::query_as::<_, Self>(
            "SELECT * FROM service_areas WHERE provider_id = $1 ORDER BY id ASC",
        )
        .bind(provider_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(areas)
    }

    /// Create a new service area
    pub async fn create(input: CreateServiceArea, conn: &mut PgConnection) -> Result<Self> {
        let area = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO service_areas (name, price, geojson, provider_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.geojson)
        .bind(input.provider_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(area)
    }

    /// Write every column of this service area back to its row
    pub async fn save(&self, conn: &mut PgConnection) -> Result<Self> {
        let area = sqlx::query_as::<_, Self>(
            r#"
            UPDATE service_areas SET
                name = $2,
                price = $3,
                geojson = $4,
                provider_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(self.price)
        .bind(&self.geojson)
        .bind(self.provider_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(area)
    }

    /// Delete a service area. Returns false if no row matched.
    pub async fn delete(id: ServiceAreaId, conn: &mut PgConnection) -> Result<bool> {
        let result = sqlx::query("DELETE FROM service_areas WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all service areas
    pub async fn count(conn: &mut PgConnection) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM service_areas")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}
