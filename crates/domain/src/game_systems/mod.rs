//! Outcome resolution for pitches and swings.
//!
//! Everything here is a pure function of ratings, timing and uniform draws in
//! [0, 1). Randomness is always passed in as a closure so the caller decides
//! whether it is seeded, scripted or system entropy.

mod outcome;
mod pitch;
mod swing;

pub use outcome::{PitchLocation, PitchOutcome};
pub use pitch::{pitch_accuracy, resolve_pitch};
pub use swing::{
    chase_contact_chance, classify_swing_score, resolve_swing, resolve_swing_with_timing,
    swing_score, timing_weight, zone_whiff_chance, SwingMatchup, SwingModel, TimingBand,
};
