//! Swing resolution.
//!
//! Two models are available:
//!
//! - **Ratings**: a deterministic score built from batter and pitcher ratings,
//!   scaled by timing, then bucketed into an outcome.
//! - **Timing**: contact/whiff chances driven by pitch location and timing,
//!   followed by a draw from a timing-banded batted-ball table.
//!
//! Timing is a value in [0, 1] where 0.5 is a perfectly squared-up swing.

use serde::{Deserialize, Serialize};

use super::outcome::{PitchLocation, PitchOutcome};
use crate::value_objects::Rating;

/// Which swing model resolves a swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingModel {
    /// Location- and timing-driven probabilities
    #[default]
    Timing,
    /// Deterministic ratings score
    Ratings,
}

/// Ratings that take part in a swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwingMatchup {
    pub contact: Rating,
    pub power: Rating,
    pub control: Rating,
    pub speed: Rating,
}

// =============================================================================
// Ratings model
// =============================================================================

/// 1.0 for a perfectly timed swing, falling linearly to 0.0 at either extreme.
pub fn timing_weight(timing: f64) -> f64 {
    1.0 - (timing - 0.5).abs() * 2.0
}

/// Score of a swing under the ratings model.
pub fn swing_score(matchup: SwingMatchup, timing: f64) -> f64 {
    let batter_score = matchup.contact.as_f64() * 0.6 + matchup.power.as_f64() * 0.4;
    let pitcher_score = matchup.control.as_f64() * 0.5 + matchup.speed.as_f64() * 0.5;
    let base = (batter_score - pitcher_score) * 0.5 + 50.0;
    base * (0.7 + timing_weight(timing) * 0.6)
}

/// Bucket a swing score. Every threshold is exclusive: a score of exactly 95
/// is a triple, not a home run.
pub fn classify_swing_score(score: f64) -> PitchOutcome {
    if score > 95.0 {
        PitchOutcome::HomeRun
    } else if score > 90.0 {
        PitchOutcome::Triple
    } else if score > 80.0 {
        PitchOutcome::Double
    } else if score > 60.0 {
        PitchOutcome::Single
    } else if score > 40.0 {
        PitchOutcome::Groundout
    } else if score > 20.0 {
        PitchOutcome::Flyout
    } else {
        PitchOutcome::SwingingStrikeout
    }
}

/// Resolve a swing with the ratings model.
pub fn resolve_swing(matchup: SwingMatchup, timing: f64) -> PitchOutcome {
    classify_swing_score(swing_score(matchup, timing))
}

// =============================================================================
// Timing model
// =============================================================================

/// Quality band of a swing's timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingBand {
    /// [0.45, 0.55]
    Perfect,
    /// [0.35, 0.65]
    Good,
    Poor,
}

impl TimingBand {
    pub fn from_timing(timing: f64) -> Self {
        if (0.45..=0.55).contains(&timing) {
            TimingBand::Perfect
        } else if (0.35..=0.65).contains(&timing) {
            TimingBand::Good
        } else {
            TimingBand::Poor
        }
    }

    /// Cumulative cutoffs for groundout, flyout, single, double and triple;
    /// anything above the last cutoff is a home run.
    fn ladder(self) -> [f64; 5] {
        match self {
            TimingBand::Perfect => [0.10, 0.30, 0.55, 0.75, 0.90],
            TimingBand::Good => [0.15, 0.55, 0.75, 0.85, 0.95],
            TimingBand::Poor => [0.20, 0.70, 0.80, 0.90, 0.97],
        }
    }

    /// Batted-ball result for a uniform draw `r` in [0, 1).
    pub fn batted_ball(self, r: f64) -> PitchOutcome {
        const RESULTS: [PitchOutcome; 5] = [
            PitchOutcome::Groundout,
            PitchOutcome::Flyout,
            PitchOutcome::Single,
            PitchOutcome::Double,
            PitchOutcome::Triple,
        ];
        self.ladder()
            .iter()
            .zip(RESULTS)
            .find(|(cutoff, _)| r < **cutoff)
            .map(|(_, outcome)| outcome)
            .unwrap_or(PitchOutcome::HomeRun)
    }
}

/// Chance of making contact when chasing a pitch out of the zone.
pub fn chase_contact_chance(contact: Rating) -> f64 {
    (0.1 + (contact.as_f64() - 50.0) * 0.01).clamp(0.05, 0.8)
}

/// Chance of missing a pitch in the zone; worse timing misses more.
pub fn zone_whiff_chance(timing: f64) -> f64 {
    if !(0.3..=0.7).contains(&timing) {
        0.4
    } else if !(0.4..=0.6).contains(&timing) {
        0.2
    } else if !(0.45..=0.55).contains(&timing) {
        0.1
    } else {
        0.05
    }
}

/// Resolve a swing (or take) with the timing model.
///
/// A take returns the called pitch. A chase connects with
/// [`chase_contact_chance`]; a swing in the zone misses with
/// [`zone_whiff_chance`]. Contact is then drawn from the timing band's table.
pub fn resolve_swing_with_timing(
    swung: bool,
    location: PitchLocation,
    contact: Rating,
    timing: f64,
    roll: &mut impl FnMut() -> f64,
) -> PitchOutcome {
    if !swung {
        return PitchOutcome::taken(location);
    }

    let connected = match location {
        PitchLocation::Ball => roll() < chase_contact_chance(contact),
        PitchLocation::Strike => roll() >= zone_whiff_chance(timing),
    };
    if !connected {
        return PitchOutcome::Whiff;
    }

    TimingBand::from_timing(timing).batted_ball(roll())
}
