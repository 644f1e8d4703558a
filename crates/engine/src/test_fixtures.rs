//! Shared builders for engine tests.

use std::sync::Arc;

use dugout_domain::{Batter, Game, GameId, Lineup, Pitcher, PlayerName, Rating, TeamName};

use crate::app::App;
use crate::infrastructure::ports::RandomPort;
use crate::infrastructure::random::SeededRandom;
use crate::infrastructure::roster::JsonRoster;
use crate::stores::GameSessionStore;
use crate::use_cases::game::LineupRequest;
use crate::use_cases::GameRules;

pub const HOME: &str = "Bears";
pub const AWAY: &str = "Eagles";

const LINEUP_SIZE: usize = 3;

fn batter_names(team: &str) -> Vec<String> {
    (1..=LINEUP_SIZE).map(|i| format!("{}{}", team, i)).collect()
}

fn pitcher_name(team: &str) -> String {
    format!("{} Ace", team)
}

fn batters(team: &str) -> Vec<Batter> {
    batter_names(team)
        .into_iter()
        .map(|name| {
            Batter::new(
                PlayerName::new(name).unwrap(),
                TeamName::new(team).unwrap(),
                Rating::AVERAGE,
                Rating::AVERAGE,
            )
            .with_batting_average(0.275)
        })
        .collect()
}

fn pitcher(team: &str) -> Pitcher {
    Pitcher::new(
        PlayerName::new(pitcher_name(team)).unwrap(),
        TeamName::new(team).unwrap(),
        Rating::AVERAGE,
        Rating::AVERAGE,
    )
    .with_era(3.50)
}

/// Three batters and an ace for each of the two fixture teams.
pub fn roster() -> JsonRoster {
    let mut all_batters = batters(HOME);
    all_batters.extend(batters(AWAY));
    JsonRoster::new(all_batters, vec![pitcher(HOME), pitcher(AWAY)]).unwrap()
}

pub fn lineup_request(team: &str) -> LineupRequest {
    LineupRequest {
        team: team.to_string(),
        batting_order: batter_names(team),
        starting_pitcher: pitcher_name(team),
    }
}

/// Bears (home) vs Eagles (away), no lineups yet.
pub fn new_game(max_innings: u32) -> Game {
    Game::new(
        TeamName::new(HOME).unwrap(),
        TeamName::new(AWAY).unwrap(),
        max_innings,
    )
    .unwrap()
}

/// Bears vs Eagles with both lineups submitted.
pub fn ready_game(max_innings: u32) -> Game {
    let mut game = new_game(max_innings);
    for team in [HOME, AWAY] {
        let name = TeamName::new(team).unwrap();
        let lineup = Lineup::new(&name, batters(team), pitcher(team)).unwrap();
        game.submit_lineup(&name, lineup).unwrap();
    }
    game
}

pub fn app_with_random(random: Arc<dyn RandomPort>, rules: GameRules) -> App {
    App::new(
        Arc::new(roster()),
        Arc::new(GameSessionStore::new()),
        random,
        rules,
    )
}

pub fn app_with_seed(seed: u64) -> App {
    app_with_random(Arc::new(SeededRandom::new(seed)), GameRules::default())
}

/// Create a game through the use cases and submit both lineups.
pub async fn started_game(app: &App, max_innings: u32) -> GameId {
    let uc = &app.use_cases.game;
    let game = uc.create.execute(HOME, AWAY, max_innings).await.unwrap();
    for team in [HOME, AWAY] {
        uc.submit_lineup
            .execute(game.id(), lineup_request(team))
            .await
            .unwrap();
    }
    game.id()
}
