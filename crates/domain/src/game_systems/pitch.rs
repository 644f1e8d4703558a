//! Pitch location resolution.
//!
//! A pitcher aims for the zone or just off it; control decides how often the
//! ball ends up where it was meant to go.

use super::outcome::PitchLocation;
use crate::value_objects::Rating;

/// Probability that a pitch lands where it was aimed.
///
/// 70% at average control, moving 0.6 points per rating point and clamped to
/// [0.4, 1.0].
pub fn pitch_accuracy(control: Rating) -> f64 {
    (0.7 + (control.as_f64() - 50.0) * 0.006).clamp(0.4, 1.0)
}

/// Resolve where an aimed pitch actually crossed the plate.
///
/// `roll` yields uniform draws in [0, 1).
pub fn resolve_pitch(
    control: Rating,
    intent: PitchLocation,
    roll: &mut impl FnMut() -> f64,
) -> PitchLocation {
    if roll() < pitch_accuracy(control) {
        intent
    } else {
        intent.flipped()
    }
}
