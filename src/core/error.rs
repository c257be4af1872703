//! Error taxonomy for session operations.
//!
//! Every rejected operation leaves session state untouched. The variants
//! map onto how the host should react:
//!
//! - `Validation`: bad user input, report and carry on
//! - `InvalidState`: operation not allowed right now, report and carry on
//! - `NotFound`: internal consistency problem, log and carry on
//! - `Configuration`: static tables or config are unusable
//! - `Persistence`: snapshot could not be written or read

use thiserror::Error;

use super::team::TeamId;

/// Crate-wide result alias.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Top-level error for every fallible engine operation.
#[derive(Debug, Error)]
pub enum GameError {
    /// Rejected user input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Operation requested in a state that forbids it.
    #[error(transparent)]
    InvalidState(#[from] InvalidState),

    /// A referenced team does not exist.
    #[error("team {team} not found")]
    NotFound { team: TeamId },

    /// Static card tables or session config are unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Snapshot save/load failure.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl GameError {
    /// True for errors caused by the user that should be shown as-is.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, GameError::Validation(_) | GameError::InvalidState(_))
    }
}

/// Reasons a team cannot be added or selected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("team name must not be empty")]
    EmptyName,

    #[error("a team named {0:?} already exists")]
    DuplicateName(String),

    #[error("roster is full ({capacity} teams maximum)")]
    RosterFull { capacity: usize },

    #[error("team index {index} out of range for {len} teams")]
    TeamIndexOutOfRange { index: usize, len: usize },

    #[error("no team ids left, reset the session")]
    TeamIdsExhausted,
}

/// Reasons an operation is not allowed in the current session phase.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("add a team before playing")]
    NoTeams,

    #[error("no card is currently active")]
    NoActiveCard,

    #[error("the game is over, reset to play again")]
    GameOver,
}

/// Snapshot save/load failures.
///
/// These never abort an in-memory transition; the session logs them and
/// keeps running.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot version {found} is not compatible with {expected}")]
    IncompatibleVersion { found: String, expected: String },

    #[error("snapshot is corrupt: {0}")]
    Corrupt(String),
}
