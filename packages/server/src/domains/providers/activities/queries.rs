//! Provider query activities

use sqlx::PgConnection;
use tracing::info;

use crate::common::{ApiError, ApiResult, Page, ProviderId};
use crate::domains::providers::models::Provider;

/// Get a single provider by ID
pub async fn get_provider(id: ProviderId, conn: &mut PgConnection) -> ApiResult<Provider> {
    info!(provider_id = %id, "Getting provider");

    Provider::find_by_id_optional(id, conn)
        .await?
        .ok_or_else(|| ApiError::not_found("Provider not found"))
}

/// List providers ordered by id
pub async fn list_providers(page: Page, conn: &mut PgConnection) -> ApiResult<Vec<Provider>> {
    info!(offset = page.offset, limit = page.limit, "Listing providers");

    Ok(Provider::find_page(&page, conn).await?)
}
