//! JSON-file roster.
//!
//! The roster is a single document listing every batter and pitcher the
//! server knows about:
//!
//! ```json
//! {
//!   "batters":  [{ "name": "Kim", "team": "Bears", "contact": 70, "power": 60 }],
//!   "pitchers": [{ "name": "Ryu", "team": "Eagles", "control": 85, "speed": 70 }]
//! }
//! ```
//!
//! Names are unique within each list; lookups are by name only.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use dugout_domain::{Batter, Pitcher, PlayerName};
use serde::Deserialize;

use crate::infrastructure::ports::{RepoError, RosterRepo};

#[derive(Debug, Default, Deserialize)]
struct RosterDocument {
    #[serde(default)]
    batters: Vec<Batter>,
    #[serde(default)]
    pitchers: Vec<Pitcher>,
}

/// Roster held in memory, loaded once at startup.
#[derive(Debug, Default)]
pub struct JsonRoster {
    batters: HashMap<PlayerName, Batter>,
    pitchers: HashMap<PlayerName, Pitcher>,
}

impl JsonRoster {
    /// Build a roster from player records.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::ConstraintViolation` on a duplicate name.
    pub fn new(batters: Vec<Batter>, pitchers: Vec<Pitcher>) -> Result<Self, RepoError> {
        let mut roster = Self::default();
        for batter in batters {
            let name = batter.name.clone();
            if roster.batters.insert(name.clone(), batter).is_some() {
                return Err(RepoError::constraint(format!("Duplicate batter '{}'", name)));
            }
        }
        for pitcher in pitchers {
            let name = pitcher.name.clone();
            if roster.pitchers.insert(name.clone(), pitcher).is_some() {
                return Err(RepoError::constraint(format!("Duplicate pitcher '{}'", name)));
            }
        }
        Ok(roster)
    }

    /// Parse a roster document.
    pub fn from_json(json: &str) -> Result<Self, RepoError> {
        let doc: RosterDocument =
            serde_json::from_str(json).map_err(RepoError::serialization)?;
        Self::new(doc.batters, doc.pitchers)
    }

    /// Load a roster document from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RepoError::storage("roster_load", format!("{}: {}", path.display(), e)))?;
        let roster = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            batters = roster.batters.len(),
            pitchers = roster.pitchers.len(),
            "Loaded roster"
        );
        Ok(roster)
    }
}

#[async_trait]
impl RosterRepo for JsonRoster {
    async fn get_batter(&self, name: &PlayerName) -> Result<Option<Batter>, RepoError> {
        Ok(self.batters.get(name).cloned())
    }

    async fn get_pitcher(&self, name: &PlayerName) -> Result<Option<Pitcher>, RepoError> {
        Ok(self.pitchers.get(name).cloned())
    }
}
