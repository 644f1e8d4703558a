//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate between the domain and the infrastructure ports.

pub mod game;

// Re-export main types
pub use game::{GameError, GameRules, GameUseCases};
