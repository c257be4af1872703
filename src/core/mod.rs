//! Core engine types: RNG, configuration, errors, teams.
//!
//! These are the building blocks every other module leans on. Nothing in
//! here knows about cards, timers or the board layout.

pub mod config;
pub mod error;
pub mod rng;
pub mod team;

pub use config::{DicePolicy, SessionConfig, DEFAULT_STORAGE_KEY, SPECIAL_SPACES, TEAM_PALETTE};
pub use error::{GameError, InvalidState, PersistenceError, Result, ValidationError};
pub use rng::GameRng;
pub use team::{Team, TeamId};
