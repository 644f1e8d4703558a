//! Creating games, submitting lineups and moving through the innings.

use std::sync::Arc;

use dugout_domain::{DomainError, Game, GameId, Lineup, PlayerName, TeamName};
use serde::Deserialize;

use super::{session, GameError};
use crate::infrastructure::ports::{GameStore, RandomPort, RosterRepo};

/// Create a new game.
pub struct CreateGame {
    store: Arc<dyn GameStore>,
    random: Arc<dyn RandomPort>,
}

impl CreateGame {
    pub fn new(store: Arc<dyn GameStore>, random: Arc<dyn RandomPort>) -> Self {
        Self { store, random }
    }

    pub async fn execute(
        &self,
        home_team: &str,
        away_team: &str,
        max_innings: u32,
    ) -> Result<Game, GameError> {
        let home = TeamName::new(home_team)?;
        let away = TeamName::new(away_team)?;
        let game = Game::new(home, away, max_innings)?
            .with_id(GameId::from_uuid(self.random.gen_uuid()));

        let snapshot = game.clone();
        self.store.insert(game).await?;

        tracing::info!(
            game_id = %snapshot.id(),
            home = %snapshot.home_team(),
            away = %snapshot.away_team(),
            max_innings,
            "Game created"
        );
        Ok(snapshot)
    }
}

/// A team's lineup as submitted by a client: player names only.
#[derive(Debug, Clone, Deserialize)]
pub struct LineupRequest {
    pub team: String,
    pub batting_order: Vec<String>,
    pub starting_pitcher: String,
}

/// Submit one team's lineup, resolving names through the roster.
pub struct SubmitLineup {
    roster: Arc<dyn RosterRepo>,
    store: Arc<dyn GameStore>,
}

impl SubmitLineup {
    pub fn new(roster: Arc<dyn RosterRepo>, store: Arc<dyn GameStore>) -> Self {
        Self { roster, store }
    }

    pub async fn execute(
        &self,
        game_id: GameId,
        request: LineupRequest,
    ) -> Result<Game, GameError> {
        let handle = session(self.store.as_ref(), game_id).await?;
        let team = TeamName::new(request.team)?;

        let mut batting_order = Vec::with_capacity(request.batting_order.len());
        for name in request.batting_order {
            let name = PlayerName::new(name)?;
            let batter = self.roster.get_batter(&name).await?.ok_or_else(|| {
                DomainError::validation(format!("Unknown batter '{}'", name))
            })?;
            batting_order.push(batter);
        }
        let pitcher_name = PlayerName::new(request.starting_pitcher)?;
        let starting_pitcher = self
            .roster
            .get_pitcher(&pitcher_name)
            .await?
            .ok_or_else(|| DomainError::validation(format!("Unknown pitcher '{}'", pitcher_name)))?;

        let lineup = Lineup::new(&team, batting_order, starting_pitcher)?;

        let mut game = handle.lock().await;
        let matchup_ready = game.submit_lineup(&team, lineup)?;

        tracing::info!(game_id = %game_id, team = %team, "Lineup submitted");
        if matchup_ready {
            if let (Some(batter), Some(pitcher)) = (game.current_batter(), game.current_pitcher()) {
                tracing::info!(
                    game_id = %game_id,
                    batter = %batter.name,
                    pitcher = %pitcher.name,
                    "Both lineups in, play ball"
                );
            }
        }
        Ok(game.clone())
    }
}

/// Flip to the next half-inning after three outs.
pub struct AdvanceHalfInning {
    store: Arc<dyn GameStore>,
}

impl AdvanceHalfInning {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<Game, GameError> {
        let handle = session(self.store.as_ref(), game_id).await?;
        let mut game = handle.lock().await;

        let (inning, half) = game.advance_half_inning().inspect_err(|e| {
            tracing::warn!(game_id = %game_id, error = %e, "Half-inning advance rejected");
        })?;

        tracing::info!(game_id = %game_id, inning, half = %half, "Half-inning started");
        Ok(game.clone())
    }
}

/// End a game now, whatever the score.
pub struct EndGame {
    store: Arc<dyn GameStore>,
}

impl EndGame {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, game_id: GameId) -> Result<Game, GameError> {
        let handle = session(self.store.as_ref(), game_id).await?;
        let mut game = handle.lock().await;

        let winner = game.end_game()?.clone();

        tracing::info!(
            game_id = %game_id,
            winner = %winner,
            home_score = game.home_score(),
            away_score = game.away_score(),
            "Game ended"
        );
        Ok(game.clone())
    }
}
