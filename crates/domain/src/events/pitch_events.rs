//! Results reported by game mutations.
//!
//! These communicate what happened when a pitch or lifecycle operation
//! changed the game, so callers can log or render it without diffing state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game_systems::PitchOutcome;
use crate::value_objects::Count;

/// How a pitch affected the plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayResult {
    /// The batter is still up
    Continues,
    /// Single, double or triple
    Hit { bases: u8 },
    HomeRun { rbis: u32 },
    Walk,
    Strikeout,
    /// Ball in play turned into one out
    Out,
    /// Groundout that also retired the runner on first
    DoublePlay,
}

impl PlayResult {
    /// Whether the pitch ended the plate appearance.
    pub fn ends_plate_appearance(self) -> bool {
        !matches!(self, PlayResult::Continues)
    }
}

impl fmt::Display for PlayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayResult::Continues => write!(f, "at bat continues"),
            PlayResult::Hit { bases } => write!(f, "{}-base hit", bases),
            PlayResult::HomeRun { rbis } => write!(f, "home run, {} RBI", rbis),
            PlayResult::Walk => write!(f, "walk"),
            PlayResult::Strikeout => write!(f, "strikeout"),
            PlayResult::Out => write!(f, "out"),
            PlayResult::DoublePlay => write!(f, "double play"),
        }
    }
}

/// Everything a single pitch did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchResolution {
    pub outcome: PitchOutcome,
    pub play: PlayResult,
    /// Runs the batting team scored on this pitch
    pub runs_scored: u32,
    /// Count after the pitch was applied
    pub count: Count,
    /// Three outs are on the board; the half-inning must be advanced
    pub side_retired: bool,
    /// The pitch ended the game
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continues_does_not_end_plate_appearance() {
        assert!(!PlayResult::Continues.ends_plate_appearance());
        assert!(PlayResult::Walk.ends_plate_appearance());
        assert!(PlayResult::HomeRun { rbis: 2 }.ends_plate_appearance());
    }

    #[test]
    fn play_result_wire_format() {
        let json = serde_json::to_string(&PlayResult::Hit { bases: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"hit","bases":2}"#);
    }
}
