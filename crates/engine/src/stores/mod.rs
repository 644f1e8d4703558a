//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in a database:
//! - `GameSessionStore` - live games, one lock per game

mod game_sessions;

pub use game_sessions::GameSessionStore;
