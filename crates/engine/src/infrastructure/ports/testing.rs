//! Testability port for injecting randomness.

use uuid::Uuid;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform draw in [0, 1).
    fn next_f64(&self) -> f64;
    fn gen_uuid(&self) -> Uuid;
}
