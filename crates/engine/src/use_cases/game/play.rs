//! Pitches and runner movement.

use std::sync::Arc;

use dugout_domain::{DomainError, Game, GameId, PitchAction, PitchLocation, PitchResolution};

use super::{session, GameError, GameRules};
use crate::infrastructure::ports::{GameStore, RandomPort};

/// What a pitch did, plus the game as it stands afterwards.
#[derive(Debug, Clone)]
pub struct PitchReport {
    pub resolution: PitchResolution,
    pub game: Game,
}

/// Batter-side event: the pitcher aims for the zone and the batter takes or
/// swings.
pub struct Pitch {
    store: Arc<dyn GameStore>,
    random: Arc<dyn RandomPort>,
    rules: GameRules,
}

impl Pitch {
    pub fn new(store: Arc<dyn GameStore>, random: Arc<dyn RandomPort>, rules: GameRules) -> Self {
        Self {
            store,
            random,
            rules,
        }
    }

    /// `timing` is required when `swung` and ignored otherwise.
    pub async fn execute(
        &self,
        game_id: GameId,
        swung: bool,
        timing: Option<f64>,
    ) -> Result<PitchReport, GameError> {
        let action = match (swung, timing) {
            (true, Some(timing)) => PitchAction::swing(timing),
            (true, None) => {
                return Err(DomainError::validation("Swing timing is required when swinging").into())
            }
            (false, _) => PitchAction::take(PitchLocation::Strike),
        };
        throw(
            self.store.as_ref(),
            self.random.as_ref(),
            &self.rules,
            game_id,
            action,
        )
        .await
    }
}

/// Pitcher-side event: a pitch aimed at a chosen location, taken by the
/// batter.
pub struct ThrowPitch {
    store: Arc<dyn GameStore>,
    random: Arc<dyn RandomPort>,
    rules: GameRules,
}

impl ThrowPitch {
    pub fn new(store: Arc<dyn GameStore>, random: Arc<dyn RandomPort>, rules: GameRules) -> Self {
        Self {
            store,
            random,
            rules,
        }
    }

    pub async fn execute(
        &self,
        game_id: GameId,
        intent: PitchLocation,
    ) -> Result<PitchReport, GameError> {
        throw(
            self.store.as_ref(),
            self.random.as_ref(),
            &self.rules,
            game_id,
            PitchAction::take(intent),
        )
        .await
    }
}

async fn throw(
    store: &dyn GameStore,
    random: &dyn RandomPort,
    rules: &GameRules,
    game_id: GameId,
    action: PitchAction,
) -> Result<PitchReport, GameError> {
    let handle = session(store, game_id).await?;
    let mut game = handle.lock().await;

    let mut roll = || random.next_f64();
    let mut resolution = game
        .pitch(action, &rules.simulation, &mut roll)
        .inspect_err(|e| tracing::warn!(game_id = %game_id, error = %e, "Pitch rejected"))?;

    tracing::debug!(
        game_id = %game_id,
        outcome = %resolution.outcome,
        play = %resolution.play,
        count = %resolution.count,
        runs = resolution.runs_scored,
        "Pitch resolved"
    );

    if rules.extra_innings_exhausted(&game) {
        game.end_game()?;
        resolution.game_over = true;
        tracing::info!(
            game_id = %game_id,
            inning = game.inning(),
            "Extra-innings limit reached, game ends in a draw"
        );
    }
    if resolution.side_retired && !resolution.game_over {
        tracing::info!(game_id = %game_id, inning = game.inning(), half = %game.half(), "Side retired");
    }
    if resolution.game_over {
        if let Some(winner) = game.winner() {
            tracing::info!(
                game_id = %game_id,
                winner = %winner,
                home_score = game.home_score(),
                away_score = game.away_score(),
                "Game over"
            );
        }
    }

    Ok(PitchReport {
        resolution,
        game: game.clone(),
    })
}

/// Result of moving runners outside pitch resolution.
#[derive(Debug, Clone)]
pub struct RunnersAdvanced {
    pub runs_scored: u32,
    pub game: Game,
}

/// Move every runner a number of bases (steals, balks, wild pitches).
pub struct AdvanceRunners {
    store: Arc<dyn GameStore>,
}

impl AdvanceRunners {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, game_id: GameId, bases: u8) -> Result<RunnersAdvanced, GameError> {
        let handle = session(self.store.as_ref(), game_id).await?;
        let mut game = handle.lock().await;

        let runs_scored = game.advance_runners(bases)?;

        tracing::info!(game_id = %game_id, bases, runs_scored, "Runners advanced");
        Ok(RunnersAdvanced {
            runs_scored,
            game: game.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dugout_domain::{Base, Half, PitchOutcome, PlayResult, Winner};

    use super::*;
    use crate::infrastructure::random::ScriptedRandom;
    use crate::test_fixtures::{self, AWAY};

    /// Every draw is 0.0: pitches hit their target and every swing misses.
    fn always_zero() -> Arc<ScriptedRandom> {
        Arc::new(ScriptedRandom::new([0.0]))
    }

    #[tokio::test]
    async fn taken_strike_counts() {
        let app = test_fixtures::app_with_random(always_zero(), GameRules::default());
        let id = test_fixtures::started_game(&app, 9).await;

        let report = app.use_cases.game.pitch.execute(id, false, None).await.unwrap();

        assert_eq!(report.resolution.outcome, PitchOutcome::CalledStrike);
        assert_eq!(report.game.count().strikes, 1);
    }

    #[tokio::test]
    async fn swing_without_timing_is_validation_error() {
        let app = test_fixtures::app_with_seed(3);
        let id = test_fixtures::started_game(&app, 9).await;

        let err = app.use_cases.game.pitch.execute(id, true, None).await.unwrap_err();

        assert!(matches!(err, GameError::Domain(ref e) if e.is_validation()));
    }

    #[tokio::test]
    async fn timing_out_of_range_is_validation_error() {
        let app = test_fixtures::app_with_seed(3);
        let id = test_fixtures::started_game(&app, 9).await;

        let err = app
            .use_cases
            .game
            .pitch
            .execute(id, true, Some(-0.1))
            .await
            .unwrap_err();

        assert!(matches!(err, GameError::Domain(ref e) if e.is_validation()));
    }

    #[tokio::test]
    async fn pitch_before_lineups_is_invalid_state() {
        let app = test_fixtures::app_with_seed(3);
        let game = app.use_cases.game.create.execute("Bears", "Eagles", 9).await.unwrap();

        let err = app
            .use_cases
            .game
            .pitch
            .execute(game.id(), false, None)
            .await
            .unwrap_err();

        assert!(matches!(err, GameError::Domain(ref e) if e.is_invalid_state()));
    }

    #[tokio::test]
    async fn pitch_for_unknown_game_is_not_found() {
        let app = test_fixtures::app_with_seed(3);
        let err = app
            .use_cases
            .game
            .pitch
            .execute(GameId::new(), false, None)
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::GameNotFound(_)));
    }

    #[tokio::test]
    async fn three_swinging_misses_strike_out() {
        let app = test_fixtures::app_with_random(always_zero(), GameRules::default());
        let id = test_fixtures::started_game(&app, 9).await;
        let pitch = &app.use_cases.game.pitch;

        pitch.execute(id, true, Some(0.5)).await.unwrap();
        pitch.execute(id, true, Some(0.5)).await.unwrap();
        let report = pitch.execute(id, true, Some(0.5)).await.unwrap();

        assert_eq!(report.resolution.outcome, PitchOutcome::Whiff);
        assert_eq!(report.resolution.play, PlayResult::Strikeout);
        assert_eq!(report.game.count().outs, 1);
        assert_eq!(report.game.current_batter_index(), 1);
    }

    #[tokio::test]
    async fn thrown_ball_counts_as_ball() {
        let app = test_fixtures::app_with_random(always_zero(), GameRules::default());
        let id = test_fixtures::started_game(&app, 9).await;

        let report = app
            .use_cases
            .game
            .throw_pitch
            .execute(id, PitchLocation::Ball)
            .await
            .unwrap();

        assert_eq!(report.resolution.outcome, PitchOutcome::Ball);
        assert_eq!(report.game.count().balls, 1);
    }

    #[tokio::test]
    async fn side_retired_blocks_pitches_until_advance() {
        let app = test_fixtures::app_with_random(always_zero(), GameRules::default());
        let id = test_fixtures::started_game(&app, 9).await;
        let uc = &app.use_cases.game;

        for _ in 0..9 {
            uc.throw_pitch.execute(id, PitchLocation::Strike).await.unwrap();
        }
        let err = uc.pitch.execute(id, false, None).await.unwrap_err();
        assert!(matches!(err, GameError::Domain(ref e) if e.is_invalid_state()));

        let game = uc.advance_half_inning.execute(id).await.unwrap();
        assert_eq!(game.half(), Half::Bottom);
        assert!(uc.pitch.execute(id, false, None).await.is_ok());
    }

    #[tokio::test]
    async fn tied_game_ends_at_extra_innings_cap() {
        let rules = GameRules {
            max_extra_innings: Some(0),
            ..GameRules::default()
        };
        let app = test_fixtures::app_with_random(always_zero(), rules);
        let id = test_fixtures::started_game(&app, 1).await;
        let uc = &app.use_cases.game;

        for _ in 0..9 {
            uc.throw_pitch.execute(id, PitchLocation::Strike).await.unwrap();
        }
        uc.advance_half_inning.execute(id).await.unwrap();
        let mut last = None;
        for _ in 0..9 {
            last = Some(uc.throw_pitch.execute(id, PitchLocation::Strike).await.unwrap());
        }

        let report = last.unwrap();
        assert!(report.resolution.game_over);
        assert!(report.game.is_game_over());
        assert_eq!(report.game.winner(), Some(&Winner::Draw));
    }

    #[tokio::test]
    async fn tied_game_without_cap_goes_to_extras() {
        let app = test_fixtures::app_with_random(always_zero(), GameRules::default());
        let id = test_fixtures::started_game(&app, 1).await;
        let uc = &app.use_cases.game;

        for _ in 0..9 {
            uc.throw_pitch.execute(id, PitchLocation::Strike).await.unwrap();
        }
        uc.advance_half_inning.execute(id).await.unwrap();
        for _ in 0..9 {
            uc.throw_pitch.execute(id, PitchLocation::Strike).await.unwrap();
        }

        let game = uc.advance_half_inning.execute(id).await.unwrap();
        assert_eq!(game.inning(), 2);
        assert!(!game.is_game_over());
    }

    #[tokio::test]
    async fn walked_runner_advances_and_scores() {
        let app = test_fixtures::app_with_random(always_zero(), GameRules::default());
        let id = test_fixtures::started_game(&app, 9).await;
        let uc = &app.use_cases.game;

        for _ in 0..4 {
            uc.throw_pitch.execute(id, PitchLocation::Ball).await.unwrap();
        }
        let moved = uc.advance_runners.execute(id, 1).await.unwrap();
        assert_eq!(moved.runs_scored, 0);
        assert!(moved.game.bases().is_occupied(Base::Second));

        let moved = uc.advance_runners.execute(id, 2).await.unwrap();
        assert_eq!(moved.runs_scored, 1);
        assert_eq!(moved.game.away_score(), 1);
        assert_eq!(moved.game.team(moved.game.half().batting_side()).as_str(), AWAY);
    }

    #[tokio::test]
    async fn advance_runners_rejects_bad_base_count() {
        let app = test_fixtures::app_with_seed(3);
        let id = test_fixtures::started_game(&app, 9).await;

        let err = app
            .use_cases
            .game
            .advance_runners
            .execute(id, 5)
            .await
            .unwrap_err();

        assert!(matches!(err, GameError::Domain(ref e) if e.is_validation()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn games_are_isolated_under_concurrency() {
        let app = Arc::new(test_fixtures::app_with_random(always_zero(), GameRules::default()));
        let first = test_fixtures::started_game(&app, 9).await;
        let second = test_fixtures::started_game(&app, 9).await;

        let balls = {
            let app = app.clone();
            tokio::spawn(async move {
                for _ in 0..3 {
                    app.use_cases
                        .game
                        .throw_pitch
                        .execute(first, PitchLocation::Ball)
                        .await
                        .unwrap();
                }
            })
        };
        let strikes = {
            let app = app.clone();
            tokio::spawn(async move {
                for _ in 0..2 {
                    app.use_cases
                        .game
                        .throw_pitch
                        .execute(second, PitchLocation::Strike)
                        .await
                        .unwrap();
                }
            })
        };
        balls.await.unwrap();
        strikes.await.unwrap();

        let first = app.use_cases.game.get.execute(first).await.unwrap();
        let second = app.use_cases.game.get.execute(second).await.unwrap();
        assert_eq!((first.count().balls, first.count().strikes), (3, 0));
        assert_eq!((second.count().balls, second.count().strikes), (0, 2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_pitches_on_one_game_are_serialized() {
        let app = Arc::new(test_fixtures::app_with_random(always_zero(), GameRules::default()));
        let id = test_fixtures::started_game(&app, 9).await;

        let tasks: Vec<_> = (0..3)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move {
                    app.use_cases
                        .game
                        .throw_pitch
                        .execute(id, PitchLocation::Ball)
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let game = app.use_cases.game.get.execute(id).await.unwrap();
        assert_eq!(game.count().balls, 3);
    }
}
