//! Router assembly. The full route table is built once at startup and owns its state.

pub mod common;
pub mod docs;
pub mod games;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use games::games_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Games API, common routes and the OpenAPI document, with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(games_routes(state))
        .merge(docs_routes())
        .layer(TraceLayer::new_for_http())
}
