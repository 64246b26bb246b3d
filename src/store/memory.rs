//! In-memory `GameStore` for handler tests. Holds games already joined.

use crate::error::AppError;
use crate::models::Game;
use crate::sql::GameQuery;
use crate::store::GameStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct MemoryGameStore {
    games: Vec<Game>,
    offline: AtomicBool,
}

impl MemoryGameStore {
    pub fn new(mut games: Vec<Game>) -> Self {
        games.sort_by_key(|g| g.id);
        MemoryGameStore {
            games,
            offline: AtomicBool::new(false),
        }
    }

    /// Make every call fail like a dropped connection.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn fetch_games(&self, query: &GameQuery) -> Result<Vec<Game>, AppError> {
        self.check_online()?;
        let matching = self.games.iter().filter(|g| query.matches(g)).cloned();
        Ok(match query.row_limit() {
            Some(n) => matching.take(n as usize).collect(),
            None => matching.collect(),
        })
    }

    async fn fetch_game(&self, query: &GameQuery) -> Result<Option<Game>, AppError> {
        self.check_online()?;
        Ok(self.games.iter().find(|g| query.matches(g)).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}
