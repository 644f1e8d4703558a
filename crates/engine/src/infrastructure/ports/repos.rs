//! Storage port traits: the roster and live game sessions.

use std::sync::Arc;

use async_trait::async_trait;
use dugout_domain::{Batter, Game, GameId, Pitcher, PlayerName};
use tokio::sync::Mutex;

use super::error::RepoError;

/// Shared handle to one live game. Holding the lock gives exclusive access
/// to that game only.
pub type GameHandle = Arc<Mutex<Game>>;

// =============================================================================
// Roster
// =============================================================================

/// Player lookup by name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterRepo: Send + Sync {
    async fn get_batter(&self, name: &PlayerName) -> Result<Option<Batter>, RepoError>;
    async fn get_pitcher(&self, name: &PlayerName) -> Result<Option<Pitcher>, RepoError>;
}

// =============================================================================
// Game sessions
// =============================================================================

/// Keyed storage of live games.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Store a new game and return its handle.
    async fn insert(&self, game: Game) -> Result<GameHandle, RepoError>;
    /// Handle to a stored game, if present.
    async fn session(&self, id: GameId) -> Result<Option<GameHandle>, RepoError>;
    /// Remove a game. Returns whether it existed.
    async fn remove(&self, id: GameId) -> Result<bool, RepoError>;
}
