//! Game aggregate - One baseball game from first pitch to final out
//!
//! The aggregate owns every piece of mutable state in a game: the inning and
//! half, the count, runners, score, both lineups and the result. It is mutated
//! through four kinds of operation only:
//!
//! - lineup submission ([`Game::submit_lineup`])
//! - plate-appearance events ([`Game::pitch`], [`Game::apply_outcome`])
//! - direct runner adjustment ([`Game::advance_runners`])
//! - lifecycle transitions ([`Game::advance_half_inning`], [`Game::end_game`])
//!
//! # Invariants
//!
//! - `home_team != away_team`, `max_innings >= 1`
//! - after every operation `strikes < 3` and `balls < 4`
//! - `outs <= 3`; three outs only ever means the half-inning is waiting for
//!   [`Game::advance_half_inning`]
//! - scores and the inning never decrease
//! - once over, a game stays over and its winner never changes
//!
//! Every operation validates before it mutates, so a returned error means the
//! game is exactly as it was.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Batter, Pitcher};
use crate::error::DomainError;
use crate::events::{PitchResolution, PlayResult};
use crate::game_systems::{
    resolve_pitch, resolve_swing, resolve_swing_with_timing, PitchLocation, PitchOutcome,
    SwingMatchup, SwingModel,
};
use crate::ids::GameId;
use crate::value_objects::{
    Base, Bases, Count, SimulationConfig, TeamName, BALLS_FOR_WALK, STRIKES_FOR_STRIKEOUT,
};

// ============================================================================
// Supporting types
// ============================================================================

/// Which half of an inning is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    /// Away team bats
    Top,
    /// Home team bats
    Bottom,
}

impl Half {
    /// The side at bat during this half.
    pub fn batting_side(self) -> Side {
        match self {
            Half::Top => Side::Away,
            Half::Bottom => Side::Home,
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Top => write!(f, "Top"),
            Half::Bottom => write!(f, "Bottom"),
        }
    }
}

/// Home or away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Team(TeamName),
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Team(team) => write!(f, "{}", team),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

/// A team's submitted batting order and starting pitcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    batting_order: Vec<Batter>,
    starting_pitcher: Pitcher,
}

impl Lineup {
    /// Build a lineup for `team`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the batting order is empty or any
    /// player belongs to another team.
    pub fn new(
        team: &TeamName,
        batting_order: Vec<Batter>,
        starting_pitcher: Pitcher,
    ) -> Result<Self, DomainError> {
        if batting_order.is_empty() {
            return Err(DomainError::validation("Batting order cannot be empty"));
        }
        if let Some(stranger) = batting_order.iter().find(|b| &b.team != team) {
            return Err(DomainError::validation(format!(
                "Batter '{}' does not play for team '{}'",
                stranger.name, team
            )));
        }
        if &starting_pitcher.team != team {
            return Err(DomainError::validation(format!(
                "Starting pitcher '{}' does not play for team '{}'",
                starting_pitcher.name, team
            )));
        }
        Ok(Self {
            batting_order,
            starting_pitcher,
        })
    }

    pub fn batting_order(&self) -> &[Batter] {
        &self.batting_order
    }

    pub fn starting_pitcher(&self) -> &Pitcher {
        &self.starting_pitcher
    }
}

/// What the pitcher and batter decided to do on a pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchAction {
    /// Where the pitcher is aiming
    pub intent: PitchLocation,
    /// Swing timing in [0, 1], or `None` for a take
    pub swing_timing: Option<f64>,
}

impl PitchAction {
    /// Batter takes a pitch aimed at `intent`.
    pub fn take(intent: PitchLocation) -> Self {
        Self {
            intent,
            swing_timing: None,
        }
    }

    /// Batter swings at a pitch aimed for the zone.
    pub fn swing(timing: f64) -> Self {
        Self {
            intent: PitchLocation::Strike,
            swing_timing: Some(timing),
        }
    }
}

// ============================================================================
// Game aggregate
// ============================================================================

/// One game between two teams.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    id: GameId,
    home_team: TeamName,
    away_team: TeamName,
    max_innings: u32,

    inning: u32,
    half: Half,
    count: Count,
    home_score: u32,
    away_score: u32,
    bases: Bases,

    home_lineup: Option<Lineup>,
    away_lineup: Option<Lineup>,
    /// Position in the batting team's order
    current_batter_index: usize,

    is_game_over: bool,
    winner: Option<Winner>,
}

impl Game {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a game at the top of the first inning with no lineups.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if both teams are the same or
    /// `max_innings` is zero.
    pub fn new(home_team: TeamName, away_team: TeamName, max_innings: u32) -> Result<Self, DomainError> {
        if home_team == away_team {
            return Err(DomainError::validation(
                "Home and away teams must be different",
            ));
        }
        if max_innings == 0 {
            return Err(DomainError::validation("Max innings must be at least 1"));
        }

        Ok(Self {
            id: GameId::new(),
            home_team,
            away_team,
            max_innings,
            inning: 1,
            half: Half::Top,
            count: Count::default(),
            home_score: 0,
            away_score: 0,
            bases: Bases::new(),
            home_lineup: None,
            away_lineup: None,
            current_batter_index: 0,
            is_game_over: false,
            winner: None,
        })
    }

    /// Use a caller-supplied identity instead of a fresh random one.
    pub fn with_id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    pub fn home_team(&self) -> &TeamName {
        &self.home_team
    }

    #[inline]
    pub fn away_team(&self) -> &TeamName {
        &self.away_team
    }

    #[inline]
    pub fn max_innings(&self) -> u32 {
        self.max_innings
    }

    #[inline]
    pub fn inning(&self) -> u32 {
        self.inning
    }

    #[inline]
    pub fn half(&self) -> Half {
        self.half
    }

    #[inline]
    pub fn count(&self) -> Count {
        self.count
    }

    #[inline]
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    #[inline]
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    #[inline]
    pub fn bases(&self) -> &Bases {
        &self.bases
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<&Winner> {
        self.winner.as_ref()
    }

    #[inline]
    pub fn current_batter_index(&self) -> usize {
        self.current_batter_index
    }

    pub fn team(&self, side: Side) -> &TeamName {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    /// Which side `team` plays for in this game.
    pub fn side_of(&self, team: &TeamName) -> Option<Side> {
        if team == &self.home_team {
            Some(Side::Home)
        } else if team == &self.away_team {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn lineup(&self, side: Side) -> Option<&Lineup> {
        match side {
            Side::Home => self.home_lineup.as_ref(),
            Side::Away => self.away_lineup.as_ref(),
        }
    }

    fn lineup_mut(&mut self, side: Side) -> Option<&mut Lineup> {
        match side {
            Side::Home => self.home_lineup.as_mut(),
            Side::Away => self.away_lineup.as_mut(),
        }
    }

    /// Both lineups are in, so there is a batter and a pitcher.
    pub fn lineups_ready(&self) -> bool {
        self.home_lineup.is_some() && self.away_lineup.is_some()
    }

    /// The batting team's order, once both lineups are set.
    pub fn batting_order(&self) -> &[Batter] {
        if !self.lineups_ready() {
            return &[];
        }
        self.lineup(self.half.batting_side())
            .map(Lineup::batting_order)
            .unwrap_or(&[])
    }

    pub fn current_batter(&self) -> Option<&Batter> {
        self.batting_order().get(self.current_batter_index)
    }

    fn current_batter_mut(&mut self) -> Option<&mut Batter> {
        if !self.lineups_ready() {
            return None;
        }
        let index = self.current_batter_index;
        self.lineup_mut(self.half.batting_side())
            .and_then(|lineup| lineup.batting_order.get_mut(index))
    }

    /// The fielding team's starter, once both lineups are set.
    pub fn current_pitcher(&self) -> Option<&Pitcher> {
        if !self.lineups_ready() {
            return None;
        }
        self.lineup(self.half.batting_side().opponent())
            .map(Lineup::starting_pitcher)
    }

    // =========================================================================
    // Lineup submission
    // =========================================================================

    /// Register a team's lineup. Once both teams have submitted, the away
    /// leadoff hitter faces the home starter.
    ///
    /// Returns `true` when this submission completed the matchup.
    ///
    /// # Errors
    ///
    /// - `Validation` if `team` is not playing in this game
    /// - `InvalidState` if the game is over or the team already submitted
    pub fn submit_lineup(&mut self, team: &TeamName, lineup: Lineup) -> Result<bool, DomainError> {
        if self.is_game_over {
            return Err(DomainError::invalid_state("Game is already over"));
        }
        let side = self.side_of(team).ok_or_else(|| {
            DomainError::validation(format!("Team '{}' is not playing in this game", team))
        })?;
        if self.lineup(side).is_some() {
            return Err(DomainError::invalid_state(format!(
                "Lineup for '{}' has already been submitted",
                team
            )));
        }

        match side {
            Side::Home => self.home_lineup = Some(lineup),
            Side::Away => self.away_lineup = Some(lineup),
        }

        if self.lineups_ready() {
            self.current_batter_index = 0;
            return Ok(true);
        }
        Ok(false)
    }

    // =========================================================================
    // Plate appearance
    // =========================================================================

    /// Throw one pitch: resolve where it lands, resolve the swing if there
    /// is one, and apply the outcome.
    ///
    /// # Errors
    ///
    /// - `Validation` if the swing timing is outside [0, 1]
    /// - `InvalidState` if the pitch cannot be thrown (see [`Game::apply_outcome`])
    pub fn pitch(
        &mut self,
        action: PitchAction,
        config: &SimulationConfig,
        roll: &mut impl FnMut() -> f64,
    ) -> Result<PitchResolution, DomainError> {
        if let Some(timing) = action.swing_timing {
            if !(0.0..=1.0).contains(&timing) {
                return Err(DomainError::validation(format!(
                    "Swing timing must be within [0, 1], got {}",
                    timing
                )));
            }
        }
        let (batter, pitcher) = self.ensure_playable()?;

        let location = resolve_pitch(pitcher.control, action.intent, roll);
        let outcome = match action.swing_timing {
            None => PitchOutcome::taken(location),
            Some(timing) => match config.swing_model {
                SwingModel::Timing => {
                    resolve_swing_with_timing(true, location, batter.contact, timing, roll)
                }
                SwingModel::Ratings => resolve_swing(
                    SwingMatchup {
                        contact: batter.contact,
                        power: batter.power,
                        control: pitcher.control,
                        speed: pitcher.speed,
                    },
                    timing,
                ),
            },
        };

        self.apply_outcome(outcome, config, roll)
    }

    /// Apply an already-resolved outcome to the game.
    ///
    /// `roll` is only drawn from for double-play chances on groundouts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the game is over, lineups are not set, or
    /// three outs are waiting for the half-inning to be advanced.
    pub fn apply_outcome(
        &mut self,
        outcome: PitchOutcome,
        config: &SimulationConfig,
        roll: &mut impl FnMut() -> f64,
    ) -> Result<PitchResolution, DomainError> {
        let (batter, _) = self.ensure_playable()?;

        let mut runs = 0;
        let mut play = match outcome {
            PitchOutcome::CalledStrike | PitchOutcome::Whiff => {
                self.count.strikes += 1;
                PlayResult::Continues
            }
            PitchOutcome::Ball => {
                self.count.balls += 1;
                PlayResult::Continues
            }
            PitchOutcome::Foul => {
                if self.count.strikes < STRIKES_FOR_STRIKEOUT - 1 {
                    self.count.strikes += 1;
                }
                PlayResult::Continues
            }
            PitchOutcome::Single | PitchOutcome::Double | PitchOutcome::Triple => {
                let bases = outcome.hit_bases().unwrap_or(1);
                runs += self.bases.advance_runners(bases)?;
                if let Some(base) = Base::from_number(bases) {
                    self.bases.place_runner(base, batter.name.clone());
                }
                PlayResult::Hit { bases }
            }
            PitchOutcome::HomeRun => {
                let rbis = self.bases.runner_count() + 1;
                self.bases.reset();
                runs += rbis;
                if let Some(hitter) = self.current_batter_mut() {
                    hitter.credit_home_run(rbis);
                }
                PlayResult::HomeRun { rbis }
            }
            PitchOutcome::Groundout => {
                let (result, forced_in) = self.ground_out(config, roll);
                runs += forced_in;
                result
            }
            PitchOutcome::Flyout => {
                self.count.record_outs(1);
                PlayResult::Out
            }
            PitchOutcome::SwingingStrikeout => {
                self.count.record_outs(1);
                PlayResult::Strikeout
            }
        };

        if self.count.strikes >= STRIKES_FOR_STRIKEOUT {
            self.count.record_outs(1);
            play = PlayResult::Strikeout;
        } else if self.count.balls >= BALLS_FOR_WALK {
            runs += self.bases.force_runners();
            self.bases.place_runner(Base::First, batter.name.clone());
            play = PlayResult::Walk;
        }

        if play.ends_plate_appearance() {
            self.count.reset_plate_appearance();
            self.advance_batting_order();
        }
        self.credit_runs(runs);

        let game_over = self.check_game_over();
        Ok(PitchResolution {
            outcome,
            play,
            runs_scored: runs,
            count: self.count,
            side_retired: self.count.is_side_retired(),
            game_over,
        })
    }

    /// Groundout: with fewer than two outs and a runner on first, either turn
    /// two or force the runner along; otherwise only the batter is out.
    fn ground_out(
        &mut self,
        config: &SimulationConfig,
        roll: &mut impl FnMut() -> f64,
    ) -> (PlayResult, u32) {
        if self.count.outs < 2 && self.bases.is_occupied(Base::First) {
            if roll() < config.double_play_probability {
                self.bases.remove_runner(Base::First);
                self.count.record_outs(2);
                return (PlayResult::DoublePlay, 0);
            }
            self.count.record_outs(1);
            let runs = self.bases.force_runners();
            return (PlayResult::Out, runs);
        }
        self.count.record_outs(1);
        (PlayResult::Out, 0)
    }

    /// Check that a pitch may be thrown and return the matchup.
    fn ensure_playable(&self) -> Result<(Batter, Pitcher), DomainError> {
        if self.is_game_over {
            return Err(DomainError::invalid_state("Game is already over"));
        }
        let (Some(batter), Some(pitcher)) = (self.current_batter(), self.current_pitcher()) else {
            return Err(DomainError::invalid_state(
                "Current batter or pitcher is not set; submit both lineups first",
            ));
        };
        if self.count.is_side_retired() && self.count.is_fresh() {
            return Err(DomainError::invalid_state(
                "Three outs recorded; advance to the next half-inning",
            ));
        }
        Ok((batter.clone(), pitcher.clone()))
    }

    /// Move to the next batter in the batting team's order, wrapping around.
    ///
    /// Returns the new batter, or `None` (and does nothing) when there is no
    /// batting order yet.
    pub fn advance_batting_order(&mut self) -> Option<&Batter> {
        let len = self.batting_order().len();
        if len == 0 {
            return None;
        }
        self.current_batter_index = (self.current_batter_index + 1) % len;
        self.current_batter()
    }

    fn credit_runs(&mut self, runs: u32) {
        match self.half.batting_side() {
            Side::Home => self.home_score += runs,
            Side::Away => self.away_score += runs,
        }
    }

    // =========================================================================
    // Runner adjustment
    // =========================================================================

    /// Move every runner `bases` bases outside normal pitch resolution
    /// (stolen bases, balks, wild pitches). Runs count for the batting team.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the game is over or the side is already retired
    /// - `Validation` if `bases` is not within 1-4
    pub fn advance_runners(&mut self, bases: u8) -> Result<u32, DomainError> {
        if self.is_game_over {
            return Err(DomainError::invalid_state("Game is already over"));
        }
        if self.count.is_side_retired() {
            return Err(DomainError::invalid_state(
                "Side is retired; advance the half-inning first",
            ));
        }
        let runs = self.bases.advance_runners(bases)?;
        self.credit_runs(runs);
        Ok(runs)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Flip to the next half-inning once three outs are recorded.
    ///
    /// Top goes to bottom of the same inning; bottom goes to the top of the
    /// next. Count and bases are cleared, the other team's starter takes the
    /// mound and the new batting team starts from the top of its order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the game is over, fewer than three outs have
    /// been recorded, or lineups are missing.
    pub fn advance_half_inning(&mut self) -> Result<(u32, Half), DomainError> {
        if self.is_game_over {
            return Err(DomainError::invalid_state("Game is already over"));
        }
        if !self.count.is_side_retired() {
            return Err(DomainError::invalid_state(format!(
                "Half-inning is not over yet ({} out)",
                self.count.outs
            )));
        }
        if !self.lineups_ready() {
            return Err(DomainError::invalid_state(
                "Both lineups must be submitted before changing sides",
            ));
        }

        match self.half {
            Half::Top => self.half = Half::Bottom,
            Half::Bottom => {
                self.inning += 1;
                self.half = Half::Top;
            }
        }
        self.count.reset_all();
        self.bases.reset();
        self.current_batter_index = 0;

        self.check_game_over();
        Ok((self.inning, self.half))
    }

    /// End the game if regulation is complete and someone is ahead.
    ///
    /// A tie after the bottom of the last scheduled inning keeps going into
    /// extra innings. Returns whether the game is over.
    pub fn check_game_over(&mut self) -> bool {
        if self.is_game_over {
            return true;
        }
        let regulation_complete = self.inning >= self.max_innings
            && self.half == Half::Bottom
            && self.count.is_side_retired();
        if regulation_complete && self.home_score != self.away_score {
            self.finish();
        }
        self.is_game_over
    }

    /// Declare the game over and record the winner.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the game has already ended.
    pub fn end_game(&mut self) -> Result<&Winner, DomainError> {
        if self.is_game_over {
            return Err(DomainError::invalid_state("Game is already over"));
        }
        Ok(self.finish())
    }

    fn finish(&mut self) -> &Winner {
        let winner = if self.home_score > self.away_score {
            Winner::Team(self.home_team.clone())
        } else if self.away_score > self.home_score {
            Winner::Team(self.away_team.clone())
        } else {
            Winner::Draw
        };
        self.is_game_over = true;
        self.winner.insert(winner)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Human-readable summary of the game state.
    pub fn stats_summary(&self) -> String {
        let runners = if self.bases.is_empty() {
            " none".to_string()
        } else {
            self.bases
                .occupied()
                .map(|(base, runner)| format!(" {}: {}", base, runner))
                .collect()
        };

        let mut lines = vec![
            format!("Game ID: {}", self.id),
            format!("Inning: {} {}", self.half, self.inning),
            format!(
                "Score: {} {} : {} {}",
                self.away_team, self.away_score, self.home_score, self.home_team
            ),
            format!(
                "Outs: {}, Strikes: {}, Balls: {}",
                self.count.outs, self.count.strikes, self.count.balls
            ),
            format!("Runners:{}", runners),
        ];
        if let Some(batter) = self.current_batter() {
            lines.push(format!(
                "Current batter: {} (AVG {:.3})",
                batter.name, batter.batting_average
            ));
        }
        if let Some(pitcher) = self.current_pitcher() {
            lines.push(format!(
                "Current pitcher: {} (ERA {:.2})",
                pitcher.name, pitcher.era
            ));
        }
        if let Some(winner) = &self.winner {
            lines.push(format!("Game over! Winner: {}", winner));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
