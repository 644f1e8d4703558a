//! Pitch outcome categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a pitch crossed the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchLocation {
    Strike,
    Ball,
}

impl PitchLocation {
    /// The other location (a missed spot).
    pub fn flipped(self) -> Self {
        match self {
            PitchLocation::Strike => PitchLocation::Ball,
            PitchLocation::Ball => PitchLocation::Strike,
        }
    }
}

/// Everything a single pitch can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchOutcome {
    /// Taken pitch in the zone
    CalledStrike,
    /// Taken pitch out of the zone
    Ball,
    /// Contact into foul territory
    Foul,
    /// Swing and miss
    Whiff,
    Single,
    Double,
    Triple,
    HomeRun,
    Groundout,
    Flyout,
    /// Strikeout decided by the swing itself rather than the count
    SwingingStrikeout,
}

impl PitchOutcome {
    /// The outcome of a pitch the batter did not swing at.
    pub fn taken(location: PitchLocation) -> Self {
        match location {
            PitchLocation::Strike => PitchOutcome::CalledStrike,
            PitchLocation::Ball => PitchOutcome::Ball,
        }
    }

    /// Bases the batter takes on a hit; `None` for anything that isn't one.
    pub fn hit_bases(self) -> Option<u8> {
        match self {
            PitchOutcome::Single => Some(1),
            PitchOutcome::Double => Some(2),
            PitchOutcome::Triple => Some(3),
            PitchOutcome::HomeRun => Some(4),
            PitchOutcome::CalledStrike
            | PitchOutcome::Ball
            | PitchOutcome::Foul
            | PitchOutcome::Whiff
            | PitchOutcome::Groundout
            | PitchOutcome::Flyout
            | PitchOutcome::SwingingStrikeout => None,
        }
    }
}

impl fmt::Display for PitchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PitchOutcome::CalledStrike => "Strike",
            PitchOutcome::Ball => "Ball",
            PitchOutcome::Foul => "Foul",
            PitchOutcome::Whiff => "Swinging strike",
            PitchOutcome::Single => "Single",
            PitchOutcome::Double => "Double",
            PitchOutcome::Triple => "Triple",
            PitchOutcome::HomeRun => "Home run!",
            PitchOutcome::Groundout => "Groundout",
            PitchOutcome::Flyout => "Flyout",
            PitchOutcome::SwingingStrikeout => "Swinging strikeout",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taken_pitch_maps_location() {
        assert_eq!(PitchOutcome::taken(PitchLocation::Strike), PitchOutcome::CalledStrike);
        assert_eq!(PitchOutcome::taken(PitchLocation::Ball), PitchOutcome::Ball);
    }

    #[test]
    fn hit_bases_only_for_hits() {
        assert_eq!(PitchOutcome::Double.hit_bases(), Some(2));
        assert_eq!(PitchOutcome::HomeRun.hit_bases(), Some(4));
        assert_eq!(PitchOutcome::Groundout.hit_bases(), None);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&PitchOutcome::HomeRun).unwrap();
        assert_eq!(json, "\"home_run\"");
    }
}
