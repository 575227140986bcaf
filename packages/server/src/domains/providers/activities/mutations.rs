//! Provider mutation activities

use sqlx::PgConnection;
use tracing::info;

use crate::common::{ApiError, ApiResult, ProviderId};
use crate::domains::providers::models::{CreateProvider, Provider, UpdateProvider};

/// Create a provider. A duplicate email surfaces as `ApiError::Conflict`.
pub async fn create_provider(input: CreateProvider, conn: &mut PgConnection) -> ApiResult<Provider> {
    info!(name = %input.name, "Creating provider");

    let provider = Provider::create(input, conn).await?;

    info!(provider_id = %provider.id, "Provider created");

    Ok(provider)
}

/// Apply a partial update. Only supplied fields change.
pub async fn update_provider(
    id: ProviderId,
    patch: UpdateProvider,
    conn: &mut PgConnection,
) -> ApiResult<Provider> {
    info!(provider_id = %id, "Updating provider");

    let mut provider = Provider::find_by_id_for_update(id, conn)
        .await?
        .ok_or_else(|| ApiError::not_found("Provider not found"))?;

    if patch.is_empty() {
        return Ok(provider);
    }

    patch.apply(&mut provider);

    Ok(provider.save(conn).await?)
}

/// Delete a provider and, through the foreign key, its service areas
pub async fn delete_provider(id: ProviderId, conn: &mut PgConnection) -> ApiResult<()> {
    info!(provider_id = %id, "Deleting provider");

    if !Provider::delete(id, conn).await? {
        return Err(ApiError::not_found("Provider not found"));
    }

    Ok(())
}
