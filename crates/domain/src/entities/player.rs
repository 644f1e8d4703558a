//! Batter and pitcher records supplied by the roster.

use serde::{Deserialize, Serialize};

use crate::value_objects::{PlayerName, Rating, TeamName};

/// A position player as seen by the simulation.
///
/// `home_runs` and `rbis` are tallies for the current game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batter {
    pub name: PlayerName,
    pub team: TeamName,
    pub contact: Rating,
    pub power: Rating,
    #[serde(default)]
    pub batting_average: f64,
    #[serde(default)]
    pub home_runs: u32,
    #[serde(default)]
    pub rbis: u32,
}

impl Batter {
    pub fn new(name: PlayerName, team: TeamName, contact: Rating, power: Rating) -> Self {
        Self {
            name,
            team,
            contact,
            power,
            batting_average: 0.0,
            home_runs: 0,
            rbis: 0,
        }
    }

    pub fn with_batting_average(mut self, average: f64) -> Self {
        self.batting_average = average;
        self
    }

    /// Credit a home run that drove in `runs` (the batter included).
    pub fn credit_home_run(&mut self, runs: u32) {
        self.home_runs += 1;
        self.rbis += runs;
    }
}

/// A pitcher as seen by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitcher {
    pub name: PlayerName,
    pub team: TeamName,
    pub control: Rating,
    pub speed: Rating,
    #[serde(default)]
    pub era: f64,
}

impl Pitcher {
    pub fn new(name: PlayerName, team: TeamName, control: Rating, speed: Rating) -> Self {
        Self {
            name,
            team,
            control,
            speed,
            era: 0.0,
        }
    }

    pub fn with_era(mut self, era: f64) -> Self {
        self.era = era;
        self
    }
}
