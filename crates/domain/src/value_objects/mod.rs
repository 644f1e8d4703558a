//! Value objects - Immutable or self-validating pieces of game state

pub mod bases;
mod count;
mod names;
mod rating;
mod simulation_config;

pub use bases::{Base, Bases};
pub use count::{Count, BALLS_FOR_WALK, OUTS_PER_HALF_INNING, STRIKES_FOR_STRIKEOUT};
pub use names::{PlayerName, TeamName};
pub use rating::{Rating, MAX_RATING};
pub use simulation_config::{SimulationConfig, DEFAULT_DOUBLE_PLAY_PROBABILITY};
