//! Read access to the games catalog. `GameStore` is the seam; `PgGameStore` runs the joined query on PostgreSQL.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::models::{Category, Game, Publisher};
use crate::sql::GameQuery;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};

#[cfg(test)]
pub(crate) mod memory;

#[async_trait]
pub trait GameStore: Send + Sync {
    /// All games matching `query`, ordered by id.
    async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<Game>, AppError>;

    /// First game matching `query`, if any.
    async fn fetch_game(&self, query: &GameQuery) -> Result<Option<Game>, AppError>;

    /// Round-trip to the store; used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Flat row produced by [`GameQuery::to_sql`]; joined columns are null when the join found nothing.
#[derive(Debug, FromRow)]
struct GameRow {
    id: i64,
    title: String,
    description: String,
    star_rating: Option<f64>,
    publisher_id: Option<i64>,
    category_id: Option<i64>,
    joined_publisher_id: Option<i64>,
    publisher_name: Option<String>,
    publisher_description: Option<String>,
    joined_category_id: Option<i64>,
    category_name: Option<String>,
    category_description: Option<String>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        let publisher = match (row.joined_publisher_id, row.publisher_name) {
            (Some(id), Some(name)) => Some(Publisher {
                id,
                name,
                description: row.publisher_description,
            }),
            _ => None,
        };
        let category = match (row.joined_category_id, row.category_name) {
            (Some(id), Some(name)) => Some(Category {
                id,
                name,
                description: row.category_description,
            }),
            _ => None,
        };
        Game {
            id: row.id,
            title: row.title,
            description: row.description,
            star_rating: row.star_rating,
            publisher_id: row.publisher_id,
            category_id: row.category_id,
            publisher,
            category,
        }
    }
}

#[derive(Clone)]
pub struct PgGameStore {
    pool: PgPool,
    schema: String,
}

impl PgGameStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgGameStore {
            pool,
            schema: schema.into(),
        }
    }

    /// Open a pool sized from config. Fails if the first connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        tracing::info!(
            schema = %config.schema,
            max_connections = config.max_connections,
            "connected to games store"
        );
        Ok(Self::new(pool, config.schema.clone()))
    }

    fn bound<'q>(
        sql: &'q str,
        params: &[i64],
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, GameRow, sqlx::postgres::PgArguments> {
        let mut query = sqlx::query_as::<_, GameRow>(sql);
        for p in params {
            query = query.bind(*p);
        }
        query
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<Game>, AppError> {
        let q = query.to_sql(&self.schema);
        tracing::debug!(sql = %q.sql, params = ?q.params, "fetching games");
        let rows = Self::bound(&q.sql, &q.params).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn fetch_game(&self, query: &GameQuery) -> Result<Option<Game>, AppError> {
        let q = query.to_sql(&self.schema);
        tracing::debug!(sql = %q.sql, params = ?q.params, "fetching game");
        let row = Self::bound(&q.sql, &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Game::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
