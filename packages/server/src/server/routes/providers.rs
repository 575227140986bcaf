//! `/providers` handlers
//!
//! Each handler validates its input, opens a session, runs one activity and
//! closes the session before building the response.

use axum::{extract::Extension, Json};

use crate::common::{ApiResult, DeleteResponse, PaginationArgs, ProviderId, Session};
use crate::domains::providers::activities;
use crate::domains::providers::data::{CreateProviderInput, ProviderData, UpdateProviderInput};
use crate::domains::providers::models::{CreateProvider, UpdateProvider};
use crate::server::app::AppState;
use crate::server::extract::{AppJson, AppPath, AppQuery};

pub async fn create_provider_handler(
    Extension(state): Extension<AppState>,
    AppJson(input): AppJson<CreateProviderInput>,
) -> ApiResult<Json<ProviderData>> {
    let input = CreateProvider::try_from(input)?;

    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::create_provider(input, session.conn()).await;
    let provider = session.finish(result).await?;

    Ok(Json(provider.into()))
}

pub async fn list_providers_handler(
    Extension(state): Extension<AppState>,
    AppQuery(args): AppQuery<PaginationArgs>,
) -> ApiResult<Json<Vec<ProviderData>>> {
    let page = args.validate()?;

    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::list_providers(page, session.conn()).await;
    let providers = session.finish(result).await?;

    Ok(Json(providers.into_iter().map(ProviderData::from).collect()))
}

pub async fn get_provider_handler(
    Extension(state): Extension<AppState>,
    AppPath(id): AppPath<ProviderId>,
) -> ApiResult<Json<ProviderData>> {
    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::get_provider(id, session.conn()).await;
    let provider = session.finish(result).await?;

    Ok(Json(provider.into()))
}

pub async fn update_provider_handler(
    Extension(state): Extension<AppState>,
    AppPath(id): AppPath<ProviderId>,
    AppJson(input): AppJson<UpdateProviderInput>,
) -> ApiResult<Json<ProviderData>> {
    let patch = UpdateProvider::try_from(input)?;

    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::update_provider(id, patch, session.conn()).await;
    let provider = session.finish(result).await?;

    Ok(Json(provider.into()))
}

pub async fn delete_provider_handler(
    Extension(state): Extension<AppState>,
    AppPath(id): AppPath<ProviderId>,
) -> ApiResult<Json<DeleteResponse>> {
    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::delete_provider(id, session.conn()).await;
    session.finish(result).await?;

    Ok(Json(DeleteResponse::deleted("Provider deleted")))
}
