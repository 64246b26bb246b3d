//! Game catalog handlers: list with optional category/publisher filters, and fetch by id.

use crate::error::AppError;
use crate::models::Game;
use crate::response::{ErrorBody, GameRecord};
use crate::sql::base_query;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::num::IntErrorKind;
use utoipa::IntoParams;

/// Query string of `GET /api/games`. Values stay raw so a bad integer can be reported by name.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListGamesParams {
    /// Only games in this category.
    pub category_id: Option<String>,
    /// Only games from this publisher.
    pub publisher_id: Option<String>,
}

impl ListGamesParams {
    /// First occurrence of each key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = ListGamesParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category_id" => &mut params.category_id,
                "publisher_id" => &mut params.publisher_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Parsed list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterValue {
    /// Parameter absent or empty.
    Any,
    Equals(i64),
    /// A well-formed integer outside the id range; no game can have it.
    Unmatchable,
}

/// Absent or empty means no filter; anything else must be an integer (surrounding whitespace allowed).
fn parse_filter(raw: Option<&str>, name: &str) -> Result<FilterValue, AppError> {
    let s = match raw {
        None | Some("") => return Ok(FilterValue::Any),
        Some(s) => s,
    };
    match s.trim().parse::<i64>() {
        Ok(n) => Ok(FilterValue::Equals(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            tracing::debug!(param = name, value = s, "filter out of id range; nothing can match");
            Ok(FilterValue::Unmatchable)
        }
        Err(_) => {
            tracing::debug!(param = name, value = s, "rejecting non-integer filter");
            Err(AppError::BadRequest(format!("Invalid {} parameter", name)))
        }
    }
}

/// Path ids are plain decimal digits; anything else is treated as an unknown game.
fn parse_game_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    params(ListGamesParams),
    responses(
        (status = 200, description = "Games matching the filters, ordered by id", body = [GameRecord]),
        (status = 400, description = "A filter is not an integer", body = ErrorBody)
    )
)]
pub async fn list_games(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<GameRecord>>, AppError> {
    let params = ListGamesParams::from_pairs(pairs);
    let category_id = parse_filter(params.category_id.as_deref(), "category_id")?;
    let publisher_id = parse_filter(params.publisher_id.as_deref(), "publisher_id")?;

    if category_id == FilterValue::Unmatchable || publisher_id == FilterValue::Unmatchable {
        return Ok(Json(Vec::new()));
    }

    let mut query = base_query();
    if let FilterValue::Equals(id) = category_id {
        query = query.with_category(id);
    }
    if let FilterValue::Equals(id) = publisher_id {
        query = query.with_publisher(id);
    }

    let games = state.store.fetch_games(&query).await?;
    Ok(Json(games.iter().map(Game::to_record).collect()))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "The game", body = GameRecord),
        (status = 404, description = "No game with this id", body = ErrorBody)
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<GameRecord>, AppError> {
    let id = parse_game_id(&id_str).ok_or(AppError::NotFound("Game"))?;
    let game = state
        .store
        .fetch_game(&base_query().with_id(id).limit(1))
        .await?
        .ok_or(AppError::NotFound("Game"))?;
    Ok(Json(game.to_record()))
}
