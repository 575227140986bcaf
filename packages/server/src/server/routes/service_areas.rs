//! `/service-areas` handlers

use axum::{extract::Extension, Json};

use crate::common::{ApiResult, DeleteResponse, PaginationArgs, ServiceAreaId, Session};
use crate::domains::service_areas::activities;
use crate::domains::service_areas::data::{
    CreateServiceAreaInput, LocationQuery, ServiceAreaData, UpdateServiceAreaInput,
};
use crate::domains::service_areas::geolocation::LocationMatch;
use crate::domains::service_areas::models::{CreateServiceArea, UpdateServiceArea};
use crate::server::app::AppState;
use crate::server::extract::{AppJson, AppPath, AppQuery};

pub async fn create_service_area_handler(
    Extension(state): Extension<AppState>,
    AppJson(input): AppJson<CreateServiceAreaInput>,
) -> ApiResult<Json<ServiceAreaData>> {
    let input = CreateServiceArea::try_from(input)?;

    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::create_service_area(input, session.conn()).await;
    let area = session.finish(result).await?;

    Ok(Json(area.into()))
}

pub async fn list_service_areas_handler(
    Extension(state): Extension<AppState>,
    AppQuery(args): AppQuery<PaginationArgs>,
) -> ApiResult<Json<Vec<ServiceAreaData>>> {
    let page = args.validate()?;

    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::list_service_areas(page, session.conn()).await;
    let areas = session.finish(result).await?;

    Ok(Json(areas.into_iter().map(ServiceAreaData::from).collect()))
}

pub async fn get_service_area_handler(
    Extension(state): Extension<AppState>,
    AppPath(id): AppPath<ServiceAreaId>,
) -> ApiResult<Json<ServiceAreaData>> {
    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::get_service_area(id, session.conn()).await;
    let area = session.finish(result).await?;

    Ok(Json(area.into()))
}

pub async fn update_service_area_handler(
    Extension(state): Extension<AppState>,
    AppPath(id): AppPath<ServiceAreaId>,
    AppJson(input): AppJson<UpdateServiceAreaInput>,
) -> ApiResult<Json<ServiceAreaData>> {
    let patch = UpdateServiceArea::try_from(input)?;

    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::update_service_area(id, patch, session.conn()).await;
    let area = session.finish(result).await?;

    Ok(Json(area.into()))
}

pub async fn delete_service_area_handler(
    Extension(state): Extension<AppState>,
    AppPath(id): AppPath<ServiceAreaId>,
) -> ApiResult<Json<DeleteResponse>> {
    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::delete_service_area(id, session.conn()).await;
    session.finish(result).await?;

    Ok(Json(DeleteResponse::deleted("Service Area deleted")))
}

/// `GET /service-areas/locations?lat=..&lng=..`
pub async fn locations_handler(
    Extension(state): Extension<AppState>,
    AppQuery(query): AppQuery<LocationQuery>,
) -> ApiResult<Json<Vec<LocationMatch>>> {
    query.validate()?;

    let mut session = Session::begin(&state.db_pool).await?;
    let result = activities::get_service_areas_by_location(
        query.lat,
        query.lng,
        state.coordinate_order,
        session.conn(),
    )
    .await;
    let matches = session.finish(result).await?;

    Ok(Json(matches))
}
