//! Unified error types for the domain layer
//!
//! Every rejected game operation is either malformed input or an action the
//! rules do not allow right now.
//! Validation always runs before mutation, so an error never leaves a game
//! partially updated.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed creation or lineup input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Action attempted against the rules (game over, lineup unset, ...)
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

impl DomainError {
    /// Creates a validation error for rejected input.
    ///
    /// Use this when an operation's arguments are malformed:
    /// - Team or player names are empty
    /// - Values are outside allowed ranges
    /// - A lineup references a player of another team
    ///
    /// # Example
    /// ```ignore
    /// if max_innings == 0 {
    ///     return Err(DomainError::validation("max innings must be at least 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Check if this is an InvalidState error.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this is a Validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
