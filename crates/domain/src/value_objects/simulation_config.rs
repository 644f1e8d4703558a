//! Tuning knobs for the plate-appearance simulation.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game_systems::SwingModel;

/// Default chance a groundout with a runner on first turns into a double play.
pub const DEFAULT_DOUBLE_PLAY_PROBABILITY: f64 = 0.3;

/// Simulation tuning shared by every game an engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Chance that a groundout with a runner on first and fewer than two outs
    /// is turned into a double play.
    #[serde(default = "default_double_play_probability")]
    pub double_play_probability: f64,

    /// Model used when the batter swings.
    #[serde(default)]
    pub swing_model: SwingModel,
}

fn default_double_play_probability() -> f64 {
    DEFAULT_DOUBLE_PLAY_PROBABILITY
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            double_play_probability: DEFAULT_DOUBLE_PLAY_PROBABILITY,
            swing_model: SwingModel::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_double_play_probability(mut self, probability: f64) -> Self {
        self.double_play_probability = probability;
        self
    }

    pub fn with_swing_model(mut self, model: SwingModel) -> Self {
        self.swing_model = model;
        self
    }

    /// Check that every probability is in [0, 1].
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=1.0).contains(&self.double_play_probability) {
            return Err(DomainError::validation(format!(
                "Double play probability must be within [0, 1], got {}",
                self.double_play_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SimulationConfig::default();
        assert!((config.double_play_probability - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.swing_model, SwingModel::Timing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_probability_out_of_range() {
        let config = SimulationConfig::default().with_double_play_probability(1.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }
}
