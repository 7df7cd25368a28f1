use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

/// Body of `GET /health`. The endpoint always answers 200; a failed
/// database ping only downgrades `status`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_db_ping(ping: Result<(), sqlx::Error>) -> Self {
        let db_healthy = match ping {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Database ping failed");
                false
            }
        };
        Self {
            status: if db_healthy {
                HealthStatus::Ok
            } else {
                HealthStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::from_db_ping(
        catalog_db::health_check(&state.pool).await,
    ))
}
