//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! game state was modified.

pub mod pitch_events;

pub use pitch_events::*;
