//! In-process game session store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dugout_domain::{Game, GameId};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{GameHandle, GameStore, RepoError};

/// Live games keyed by id.
///
/// Each game sits behind its own mutex: a caller holding one game's lock
/// never blocks callers working on another game.
#[derive(Default)]
pub struct GameSessionStore {
    games: DashMap<GameId, GameHandle>,
}

impl GameSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for GameSessionStore {
    async fn insert(&self, game: Game) -> Result<GameHandle, RepoError> {
        let id = game.id();
        let handle = Arc::new(Mutex::new(game));
        if self.games.insert(id, handle.clone()).is_some() {
            tracing::warn!(game_id = %id, "Replaced an existing game session");
        }
        Ok(handle)
    }

    async fn session(&self, id: GameId) -> Result<Option<GameHandle>, RepoError> {
        Ok(self.games.get(&id).map(|entry| entry.value().clone()))
    }

    async fn remove(&self, id: GameId) -> Result<bool, RepoError> {
        Ok(self.games.remove(&id).is_some())
    }
}
