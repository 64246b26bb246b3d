//! OpenAPI document for the catalog, served as JSON.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::games::list_games,
        crate::handlers::games::get_game,
        crate::routes::common::health,
        crate::routes::common::ready,
        crate::routes::common::version,
    ),
    components(
        schemas(
            crate::response::GameRecord,
            crate::response::RelatedRecord,
            crate::response::ErrorBody,
            crate::routes::common::ServiceStatus,
            crate::routes::common::BuildInfo,
        )
    ),
    tags(
        (name = "games", description = "Read-only games catalog"),
        (name = "service", description = "Liveness, readiness and build info"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/api/openapi.json", get(openapi_json))
}
