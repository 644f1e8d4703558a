//! Game use cases.
//!
//! Every operation on an existing game follows the same flow:
//! 1. Look up the game's session handle
//! 2. Do any async lookups (roster) without holding the lock
//! 3. Lock the game; the domain operation validates before it mutates
//! 4. Return a snapshot taken under the lock
//!
//! Locks are per game, so operations on different games never wait on each
//! other.

use std::sync::Arc;

use dugout_domain::{DomainError, Game, GameId, Half, SimulationConfig};

mod lifecycle;
mod play;
mod queries;

pub use lifecycle::{AdvanceHalfInning, CreateGame, EndGame, LineupRequest, SubmitLineup};
pub use play::{AdvanceRunners, Pitch, PitchReport, RunnersAdvanced, ThrowPitch};
pub use queries::{DeleteGame, GetGame, GetStats};

use crate::infrastructure::ports::{GameHandle, GameStore, RepoError};

/// Container for game use cases.
pub struct GameUseCases {
    pub create: Arc<CreateGame>,
    pub submit_lineup: Arc<SubmitLineup>,
    pub pitch: Arc<Pitch>,
    pub throw_pitch: Arc<ThrowPitch>,
    pub advance_half_inning: Arc<AdvanceHalfInning>,
    pub end_game: Arc<EndGame>,
    pub advance_runners: Arc<AdvanceRunners>,
    pub get: Arc<GetGame>,
    pub stats: Arc<GetStats>,
    pub delete: Arc<DeleteGame>,
}

impl GameUseCases {
    pub fn new(
        create: Arc<CreateGame>,
        submit_lineup: Arc<SubmitLineup>,
        pitch: Arc<Pitch>,
        throw_pitch: Arc<ThrowPitch>,
        advance_half_inning: Arc<AdvanceHalfInning>,
        end_game: Arc<EndGame>,
        advance_runners: Arc<AdvanceRunners>,
        get: Arc<GetGame>,
        stats: Arc<GetStats>,
        delete: Arc<DeleteGame>,
    ) -> Self {
        Self {
            create,
            submit_lineup,
            pitch,
            throw_pitch,
            advance_half_inning,
            end_game,
            advance_runners,
            get,
            stats,
            delete,
        }
    }
}

/// Engine-level rules layered over the domain's simulation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameRules {
    pub simulation: SimulationConfig,
    /// Extra innings allowed before a tied game is called a draw
    pub max_extra_innings: Option<u32>,
}

impl GameRules {
    /// A tied game has just finished the bottom of its last allowed inning.
    pub fn extra_innings_exhausted(&self, game: &Game) -> bool {
        let Some(cap) = self.max_extra_innings else {
            return false;
        };
        !game.is_game_over()
            && game.half() == Half::Bottom
            && game.count().is_side_retired()
            && game.inning() >= game.max_innings().saturating_add(cap)
            && game.home_score() == game.away_score()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Game not found: {0}")]
    GameNotFound(GameId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Fetch a game's session handle.
async fn session(store: &dyn GameStore, game_id: GameId) -> Result<GameHandle, GameError> {
    store
        .session(game_id)
        .await?
        .ok_or(GameError::GameNotFound(game_id))
}

#[cfg(test)]
mod tests {
    use dugout_domain::PitchOutcome;

    use super::*;

    /// Play flyouts until the bottom of the last scheduled inning is done.
    fn tied_game_after_bottom(max_innings: u32) -> Game {
        let mut game = crate::test_fixtures::ready_game(max_innings);
        let config = SimulationConfig::default();
        loop {
            for _ in 0..3 {
                game.apply_outcome(PitchOutcome::Flyout, &config, &mut || 0.99)
                    .unwrap();
            }
            if game.half() == Half::Bottom && game.inning() == max_innings {
                return game;
            }
            game.advance_half_inning().unwrap();
        }
    }

    #[test]
    fn no_cap_never_exhausts() {
        let game = tied_game_after_bottom(1);
        assert!(!GameRules::default().extra_innings_exhausted(&game));
    }

    #[test]
    fn cap_reached_on_tied_bottom() {
        let game = tied_game_after_bottom(2);
        let rules = GameRules {
            max_extra_innings: Some(0),
            ..GameRules::default()
        };
        assert!(rules.extra_innings_exhausted(&game));

        let rules = GameRules {
            max_extra_innings: Some(1),
            ..GameRules::default()
        };
        assert!(!rules.extra_innings_exhausted(&game));
    }
}
