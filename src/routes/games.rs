//! Game catalog routes under `/api/games`.

use crate::handlers::games::{get_game, list_games};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn games_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/games", get(list_games))
        .route("/api/games/:id", get(get_game))
        .with_state(state)
}
