//! Ball/strike/out count.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const OUTS_PER_HALF_INNING: u8 = 3;
pub const STRIKES_FOR_STRIKEOUT: u8 = 3;
pub const BALLS_FOR_WALK: u8 = 4;

/// Outs in the half-inning plus the count on the current batter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub outs: u8,
    pub strikes: u8,
    pub balls: u8,
}

impl Count {
    /// Clear balls and strikes at the end of a plate appearance.
    pub fn reset_plate_appearance(&mut self) {
        self.strikes = 0;
        self.balls = 0;
    }

    /// Clear everything at a half-inning change.
    pub fn reset_all(&mut self) {
        *self = Count::default();
    }

    /// Record outs, never exceeding three.
    pub fn record_outs(&mut self, outs: u8) {
        self.outs = (self.outs + outs).min(OUTS_PER_HALF_INNING);
    }

    pub fn is_fresh(&self) -> bool {
        self.strikes == 0 && self.balls == 0
    }

    /// Three outs are on the board and the half-inning is waiting to be
    /// advanced.
    pub fn is_side_retired(&self) -> bool {
        self.outs >= OUTS_PER_HALF_INNING
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}, {} out", self.balls, self.strikes, self.outs)
    }
}
