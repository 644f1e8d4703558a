//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns result types from mutations describing what changed

pub mod game;

pub use game::{Game, Half, Lineup, PitchAction, Side, Winner};
