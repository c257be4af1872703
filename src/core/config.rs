//! Session configuration.
//!
//! Hosts configure the engine at startup with a `SessionConfig`. Every
//! field has a default matching the standard game, so a partial TOML file
//! (or none at all) is enough:
//!
//! ```
//! use astro_pictionary::core::{DicePolicy, SessionConfig};
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     timer_seconds = 90
//!     dice_policy = "advance_turn"
//! "#).unwrap();
//!
//! assert_eq!(config.timer_seconds, 90);
//! assert_eq!(config.board_length, 50);
//! assert_eq!(config.dice_policy, DicePolicy::AdvanceTurn);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Board positions that trigger a bonus-draw prompt.
pub const SPECIAL_SPACES: [u32; 14] = [3, 6, 10, 13, 17, 20, 23, 27, 31, 34, 38, 42, 45, 49];

/// Team colours, assigned in join order.
pub const TEAM_PALETTE: [&str; 8] = [
    "#f44336", "#2196f3", "#4caf50", "#ff9800", "#9c27b0", "#00bcd4", "#795548", "#607d8b",
];

/// Default key the snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "astronomyPictionaryGame";

/// What a dice roll does to turn order.
///
/// Card resolution always rotates the turn; dice rolls do not by default.
/// `AdvanceTurn` makes a roll behave like a resolved card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DicePolicy {
    #[default]
    TurnNeutral,
    AdvanceTurn,
}

/// Tunable rules and wiring for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Countdown length per card, in seconds.
    pub timer_seconds: u32,

    /// Finish square. Reaching it wins.
    pub board_length: u32,

    /// Squares that trigger a bonus-draw prompt. Strictly increasing.
    pub special_spaces: Vec<u32>,

    /// Roster capacity.
    pub max_teams: usize,

    /// Colours handed out by join order. Needs at least `max_teams` entries.
    pub palette: Vec<String>,

    /// Score awarded per guessed card.
    pub points_per_success: u32,

    /// Squares moved after a guessed card.
    pub success_spaces: u32,

    /// Squares moved after a skipped card.
    pub skip_spaces: u32,

    /// Sides on the die.
    pub die_faces: u32,

    pub dice_policy: DicePolicy,

    /// Key the snapshot is saved under.
    pub storage_key: String,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timer_seconds: 60,
            board_length: 50,
            special_spaces: SPECIAL_SPACES.to_vec(),
            max_teams: 8,
            palette: TEAM_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            points_per_success: 10,
            success_spaces: 1,
            skip_spaces: 1,
            die_faces: 6,
            dice_policy: DicePolicy::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| GameError::Configuration(format!("invalid session config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.timer_seconds == 0 {
            return Err(config_error("timer_seconds must be positive"));
        }
        if self.board_length == 0 {
            return Err(config_error("board_length must be positive"));
        }
        if self.max_teams == 0 {
            return Err(config_error("max_teams must be positive"));
        }
        if self.palette.len() < self.max_teams {
            return Err(config_error(format!(
                "palette has {} colours for {} teams",
                self.palette.len(),
                self.max_teams
            )));
        }
        if self.die_faces == 0 {
            return Err(config_error("die_faces must be positive"));
        }
        if !self.special_spaces.windows(2).all(|w| w[0] < w[1]) {
            return Err(config_error("special_spaces must be strictly increasing"));
        }
        if let Some(&bad) = self
            .special_spaces
            .iter()
            .find(|&&s| s == 0 || s >= self.board_length)
        {
            return Err(config_error(format!(
                "special space {bad} is outside the board (1..{})",
                self.board_length
            )));
        }
        Ok(())
    }

    /// Set the countdown length.
    #[must_use]
    pub fn with_timer_seconds(mut self, seconds: u32) -> Self {
        self.timer_seconds = seconds;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the dice turn policy.
    #[must_use]
    pub fn with_dice_policy(mut self, policy: DicePolicy) -> Self {
        self.dice_policy = policy;
        self
    }

    /// Set the snapshot storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

fn config_error(message: impl Into<String>) -> GameError {
    GameError::Configuration(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.timer_seconds, 60);
        assert_eq!(config.board_length, 50);
        assert_eq!(config.max_teams, 8);
        assert_eq!(config.palette.len(), 8);
        assert_eq!(config.palette[0], "#f44336");
        assert_eq!(config.special_spaces.len(), 14);
        assert_eq!(config.dice_policy, DicePolicy::TurnNeutral);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_timer_seconds(30)
            .with_seed(123)
            .with_dice_policy(DicePolicy::AdvanceTurn)
            .with_storage_key("test-key");

        assert_eq!(config.timer_seconds, 30);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.dice_policy, DicePolicy::AdvanceTurn);
        assert_eq!(config.storage_key, "test-key");
    }

    #[test]
    fn test_from_toml_partial() {
        let config = SessionConfig::from_toml_str("seed = 9\nmax_teams = 4").unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_teams, 4);
        assert_eq!(config.timer_seconds, 60);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = SessionConfig::from_toml_str("timer_seconds = \"soon\"").unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_timer = SessionConfig::default().with_timer_seconds(0);
        assert!(zero_timer.validate().is_err());

        let unsorted = SessionConfig {
            special_spaces: vec![6, 3],
            ..SessionConfig::default()
        };
        assert!(unsorted.validate().is_err());

        let off_board = SessionConfig {
            special_spaces: vec![3, 50],
            ..SessionConfig::default()
        };
        assert!(off_board.validate().is_err());

        let short_palette = SessionConfig {
            palette: vec!["#000000".to_string()],
            ..SessionConfig::default()
        };
        assert!(short_palette.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
