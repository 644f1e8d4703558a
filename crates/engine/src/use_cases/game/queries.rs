//! Read-only views and deletion.

use std::sync::Arc;

use dugout_domain::{Game, GameId};

use super::{session, GameError};
use crate::infrastructure::ports::GameStore;

/// Snapshot of a game.
pub struct GetGame {
    store: Arc<dyn GameStore>,
}

impl GetGame {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<Game, GameError> {
        let handle = session(self.store.as_ref(), game_id).await?;
        let game = handle.lock().await;
        Ok(game.clone())
    }
}

/// Human-readable summary of a game.
pub struct GetStats {
    store: Arc<dyn GameStore>,
}

impl GetStats {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<String, GameError> {
        let handle = session(self.store.as_ref(), game_id).await?;
        let game = handle.lock().await;
        Ok(game.stats_summary())
    }
}

/// Drop a game from the session store.
pub struct DeleteGame {
    store: Arc<dyn GameStore>,
}

impl DeleteGame {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<(), GameError> {
        if !self.store.remove(game_id).await? {
            return Err(GameError::GameNotFound(game_id));
        }
        tracing::info!(game_id = %game_id, "Game deleted");
        Ok(())
    }
}
