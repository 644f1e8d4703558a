//! Baseball game domain: count, runners, plate appearances and the inning
//! lifecycle. Pure logic with no I/O; randomness is supplied by the caller.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Game, Half, Lineup, PitchAction, Side, Winner};
pub use entities::{Batter, Pitcher};
pub use error::DomainError;
pub use events::{PitchResolution, PlayResult};
pub use game_systems::{PitchLocation, PitchOutcome, SwingModel};
pub use ids::GameId;
pub use value_objects::{
    Base, Bases, Count, PlayerName, Rating, SimulationConfig, TeamName,
    DEFAULT_DOUBLE_PLAY_PROBABILITY,
};
