//! Games catalog: read-only REST API over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use models::{Category, Game, Publisher};
pub use response::{ErrorBody, GameRecord, RelatedRecord};
pub use routes::{common_routes, docs_routes, games_routes, router, ApiDoc};
pub use sql::{base_query, GameFilter, GameQuery};
pub use state::AppState;
pub use store::{GameStore, PgGameStore};
