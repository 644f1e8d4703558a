//! Environment-driven engine settings.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` (or `PORT`) | `3000` |
//! | `ROSTER_PATH` | `data/roster.json` |
//! | `RNG_SEED` | unset (system randomness) |
//! | `SWING_MODEL` | `timing` (`timing` or `ratings`) |
//! | `DOUBLE_PLAY_PROBABILITY` | `0.3` |
//! | `MAX_EXTRA_INNINGS` | unset (no cap) |

use std::path::PathBuf;

use dugout_domain::{SimulationConfig, SwingModel};

use crate::use_cases::game::GameRules;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_ROSTER_PATH: &str = "data/roster.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl SettingsError {
    fn invalid(key: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            key,
            message: message.to_string(),
        }
    }
}

/// Startup configuration for the engine binary.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub server_host: String,
    pub server_port: u16,
    pub roster_path: PathBuf,
    /// Seed for reproducible draws within one process
    pub rng_seed: Option<u64>,
    pub rules: GameRules,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            rng_seed: None,
            rules: GameRules::default(),
        }
    }
}

impl EngineSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut settings = Self::default();

        if let Some(host) = get("SERVER_HOST") {
            settings.server_host = host;
        }
        if let Some(port) = get("SERVER_PORT").or_else(|| get("PORT")) {
            settings.server_port = port
                .parse()
                .map_err(|e| SettingsError::invalid("SERVER_PORT", e))?;
        }
        if let Some(path) = get("ROSTER_PATH") {
            settings.roster_path = PathBuf::from(path);
        }
        if let Some(seed) = get("RNG_SEED") {
            settings.rng_seed = Some(
                seed.parse()
                    .map_err(|e| SettingsError::invalid("RNG_SEED", e))?,
            );
        }

        let mut simulation = SimulationConfig::default();
        if let Some(model) = get("SWING_MODEL") {
            simulation = simulation.with_swing_model(parse_swing_model(&model)?);
        }
        if let Some(probability) = get("DOUBLE_PLAY_PROBABILITY") {
            let probability: f64 = probability
                .parse()
                .map_err(|e| SettingsError::invalid("DOUBLE_PLAY_PROBABILITY", e))?;
            simulation = simulation.with_double_play_probability(probability);
        }
        simulation
            .validate()
            .map_err(|e| SettingsError::invalid("DOUBLE_PLAY_PROBABILITY", e))?;
        settings.rules.simulation = simulation;

        if let Some(cap) = get("MAX_EXTRA_INNINGS") {
            settings.rules.max_extra_innings = Some(
                cap.parse()
                    .map_err(|e| SettingsError::invalid("MAX_EXTRA_INNINGS", e))?,
            );
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_swing_model(value: &str) -> Result<SwingModel, SettingsError> {
    match value.to_ascii_lowercase().as_str() {
        "timing" => Ok(SwingModel::Timing),
        "ratings" => Ok(SwingModel::Ratings),
        other => Err(SettingsError::invalid(
            "SWING_MODEL",
            format!("expected 'timing' or 'ratings', got '{}'", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<EngineSettings, SettingsError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineSettings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
        assert_eq!(settings.rules.simulation.swing_model, SwingModel::Timing);
        assert!(settings.rules.max_extra_innings.is_none());
    }

    #[test]
    fn reads_every_key() {
        let settings = settings_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("ROSTER_PATH", "/tmp/roster.json"),
            ("RNG_SEED", "99"),
            ("SWING_MODEL", "Ratings"),
            ("DOUBLE_PLAY_PROBABILITY", "0.5"),
            ("MAX_EXTRA_INNINGS", "3"),
        ])
        .unwrap();

        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.roster_path, PathBuf::from("/tmp/roster.json"));
        assert_eq!(settings.rng_seed, Some(99));
        assert_eq!(settings.rules.simulation.swing_model, SwingModel::Ratings);
        assert!((settings.rules.simulation.double_play_probability - 0.5).abs() < f64::EPSILON);
        assert_eq!(settings.rules.max_extra_innings, Some(3));
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        let settings = settings_from(&[("PORT", "9000")]).unwrap();
        assert_eq!(settings.server_port, 9000);
    }

    #[test]
    fn blank_values_take_defaults() {
        let settings = settings_from(&[("SERVER_HOST", "  "), ("RNG_SEED", "")]).unwrap();
        assert_eq!(settings.server_host, DEFAULT_SERVER_HOST);
        assert!(settings.rng_seed.is_none());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(settings_from(&[("SERVER_PORT", "http")]).is_err());
        assert!(settings_from(&[("SWING_MODEL", "vibes")]).is_err());
        assert!(settings_from(&[("DOUBLE_PLAY_PROBABILITY", "1.5")]).is_err());
        assert!(settings_from(&[("MAX_EXTRA_INNINGS", "-1")]).is_err());
    }
}
