//! Service routes: liveness, store readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness/readiness report. `store` is only present on `/ready`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<&'static str>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses((status = 200, description = "Process is up", body = ServiceStatus))
)]
pub async fn health() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok",
        store: None,
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "service",
    responses(
        (status = 200, description = "Games store reachable", body = ServiceStatus),
        (status = 503, description = "Games store unreachable", body = ServiceStatus)
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ServiceStatus>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ServiceStatus {
                status: "ok",
                store: Some("reachable"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "games store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ServiceStatus {
                    status: "degraded",
                    store: Some("unreachable"),
                }),
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/version",
    tag = "service",
    responses((status = 200, description = "Crate name and version", body = BuildInfo))
)]
pub async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
