//! Dugout Engine library.
//!
//! This crate contains all server-side code for the Dugout game engine.
//!
//! ## Structure
//!
//! - `use_cases/` - Game operations orchestrated over the domain
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `stores/` - In-process session storage
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Test fixtures module shared by the engine's unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
