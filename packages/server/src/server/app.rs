//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, CoordinateOrder};
use crate::server::routes::{
    create_provider_handler, create_service_area_handler, delete_provider_handler,
    delete_service_area_handler, get_provider_handler, get_service_area_handler, health_handler,
    list_providers_handler, list_service_areas_handler, locations_handler,
    update_provider_handler, update_service_area_handler,
};

/// Shared application state
///
/// Holds only the pool and immutable settings; every request opens its own
/// session from the pool.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub coordinate_order: CoordinateOrder,
}

impl AppState {
    pub fn new(db_pool: PgPool, config: &Config) -> Self {
        Self {
            db_pool,
            coordinate_order: config.coordinate_order,
        }
    }
}

/// Build the Axum application router
///
/// Collection routes are served with and without the trailing slash.
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - allow any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    let providers = get(list_providers_handler).post(create_provider_handler);
    let service_areas = get(list_service_areas_handler).post(create_service_area_handler);

    Router::new()
        // Providers
        .route("/providers", providers.clone())
        .route("/providers/", providers)
        .route(
            "/providers/:id",
            get(get_provider_handler)
                .put(update_provider_handler)
                .delete(delete_provider_handler),
        )
        // Service areas
        .route("/service-areas", service_areas.clone())
        .route("/service-areas/", service_areas)
        .route("/service-areas/locations", get(locations_handler))
        .route("/service-areas/locations/", get(locations_handler))
        .route(
            "/service-areas/:id",
            get(get_service_area_handler)
                .put(update_service_area_handler)
                .delete(delete_service_area_handler),
        )
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
