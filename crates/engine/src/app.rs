//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{GameStore, RandomPort, RosterRepo};
use crate::use_cases::game::{
    AdvanceHalfInning, AdvanceRunners, CreateGame, DeleteGame, EndGame, GetGame, GetStats, Pitch,
    SubmitLineup, ThrowPitch,
};
use crate::use_cases::{GameRules, GameUseCases};

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub game: GameUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        roster: Arc<dyn RosterRepo>,
        store: Arc<dyn GameStore>,
        random: Arc<dyn RandomPort>,
        rules: GameRules,
    ) -> Self {
        let game = GameUseCases::new(
            Arc::new(CreateGame::new(store.clone(), random.clone())),
            Arc::new(SubmitLineup::new(roster, store.clone())),
            Arc::new(Pitch::new(store.clone(), random.clone(), rules)),
            Arc::new(ThrowPitch::new(store.clone(), random, rules)),
            Arc::new(AdvanceHalfInning::new(store.clone())),
            Arc::new(EndGame::new(store.clone())),
            Arc::new(AdvanceRunners::new(store.clone())),
            Arc::new(GetGame::new(store.clone())),
            Arc::new(GetStats::new(store.clone())),
            Arc::new(DeleteGame::new(store)),
        );

        Self {
            use_cases: UseCases { game },
        }
    }
}
