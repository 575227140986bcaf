//! `GET /health`
//!
//! 200 when the database answers a ping within [`PING_TIMEOUT`], 503 otherwise.
//! The body always carries the ping result and the pool counters.

use std::time::{Duration, Instant};

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::config::CoordinateOrder;
use crate::server::app::AppState;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: HealthStatus,
    database: DatabasePing,
    connection_pool: PoolStats,
    coordinate_order: CoordinateOrder,
}

#[derive(Serialize)]
pub struct DatabasePing {
    status: &'static str,
    latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DatabasePing {
    async fn run(pool: &PgPool) -> Self {
        let started = Instant::now();
        let outcome =
            tokio::time::timeout(PING_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await;
        let latency_ms = started.elapsed().as_millis() as u64;

        let error = match outcome {
            Ok(Ok(_)) => None,
            Ok(Err(e)) => Some(format!("Query failed: {}", e)),
            Err(_) => Some(format!("No answer within {}s", PING_TIMEOUT.as_secs())),
        };

        Self {
            status: if error.is_none() { "ok" } else { "error" },
            latency_ms,
            error,
        }
    }

    fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Serialize)]
pub struct PoolStats {
    open: u32,
    idle: usize,
    max: u32,
}

impl From<&PgPool> for PoolStats {
    fn from(pool: &PgPool) -> Self {
        Self {
            open: pool.size(),
            idle: pool.num_idle(),
            max: pool.options().get_max_connections(),
        }
    }
}

pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = DatabasePing::run(&state.db_pool).await;

    let (code, status) = if database.is_ok() {
        (StatusCode::OK, HealthStatus::Healthy)
    } else {
        tracing::warn!(error = ?database.error, "Health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Unhealthy)
    };

    (
        code,
        Json(HealthResponse {
            status,
            connection_pool: PoolStats::from(&state.db_pool),
            database,
            coordinate_order: state.coordinate_order,
        }),
    )
}
