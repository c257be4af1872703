//! Persisted session snapshot.
//!
//! A snapshot is a single JSON blob with camelCase keys. Loading merges it
//! over defaults field by field: unknown keys are ignored and missing keys
//! take their default. The countdown's running flag is never stored, so a
//! reloaded session always comes back with the timer paused.

use serde::{Deserialize, Serialize};

use super::phase::Prompt;
use crate::cards::Card;
use crate::core::{PersistenceError, Team};

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// Serialized session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub version: String,
    pub teams: Vec<Team>,
    pub current_team_index: usize,
    pub current_card: Option<Card>,
    /// Seconds left on the countdown. Missing means a full countdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_seconds: Option<u32>,
    /// Deck positions drawn this cycle, in draw order.
    pub used_cards: Vec<usize>,
    pub game_started: bool,
    /// Card ids in deck order, so `used_cards` positions survive a reload.
    pub deck_order: Vec<String>,
    pub pending_prompt: Option<Prompt>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            teams: Vec::new(),
            current_team_index: 0,
            current_card: None,
            timer_seconds: None,
            used_cards: Vec::new(),
            game_started: false,
            deck_order: Vec::new(),
            pending_prompt: None,
        }
    }
}

impl Snapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode JSON, rejecting snapshots from an incompatible major version.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<(), PersistenceError> {
        if major(&self.version) == major(SNAPSHOT_VERSION) {
            Ok(())
        } else {
            Err(PersistenceError::IncompatibleVersion {
                found: self.version.clone(),
                expected: SNAPSHOT_VERSION.to_string(),
            })
        }
    }
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}
