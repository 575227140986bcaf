//! Service area mutation activities

use sqlx::PgConnection;
use tracing::info;

use crate::common::{ApiError, ApiResult, ServiceAreaId};
use crate::domains::providers::models::Provider;
use crate::domains::service_areas::models::{
    CreateServiceArea, ServiceArea, ServiceAreaWithProvider, UpdateServiceArea,
};

/// Create a service area.
///
/// The provider reference is checked by the foreign key; a dangling
/// `provider_id` surfaces as `ApiError::Validation`.
pub async fn create_service_area(
    input: CreateServiceArea,
    conn: &mut PgConnection,
) -> ApiResult<ServiceAreaWithProvider> {
    info!(name = %input.name, provider_id = %input.provider_id, "Creating service area");

    let area = ServiceArea::create(input, conn).await?;

    info!(service_area_id = %area.id, "Service area created");

    reload(area.id, conn).await
}

/// Apply a partial update. Only supplied fields change.
///
/// A supplied `provider_id` must name an existing provider; otherwise the
/// update fails with not-found before anything is written.
pub async fn update_service_area(
    id: ServiceAreaId,
    patch: UpdateServiceArea,
    conn: &mut PgConnection,
) -> ApiResult<ServiceAreaWithProvider> {
    info!(service_area_id = %id, "Updating service area");

    let mut area = ServiceArea::find_by_id_for_update(id, conn)
        .await?
        .ok_or_else(|| ApiError::not_found("Service area not found"))?;

    if let Some(provider_id) = patch.provider_id {
        if !Provider::exists(provider_id, conn).await? {
            return Err(ApiError::not_found("Provider not found"));
        }
    }

    if !patch.is_empty() {
        patch.apply(&mut area);
        area.save(conn).await?;
    }

    reload(id, conn).await
}

/// Delete a service area
pub async fn delete_service_area(id: ServiceAreaId, conn: &mut PgConnection) -> ApiResult<()> {
    info!(service_area_id = %id, "Deleting service area");

    if !ServiceArea::delete(id, conn).await? {
        return Err(ApiError::not_found("Service Area not found"));
    }

    Ok(())
}

async fn reload(id: ServiceAreaId, conn: &mut PgConnection) -> ApiResult<ServiceAreaWithProvider> {
    ServiceArea::find_with_provider(id, conn)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Service area {} vanished", id)))
}
