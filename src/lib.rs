//! # astro-pictionary
//!
//! Session engine for a team-based drawing race: teams take turns drawing
//! astronomy prompt cards against a countdown, and every resolved card
//! moves the team along a linear board toward the finish.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never renders or reads input. A host sends
//!    [`session::Intent`]s and shows the [`session::SessionEvent`]s that
//!    come back.
//!
//! 2. **Injected Effects**: Randomness, the host clock and storage all sit
//!    behind seams (`GameRng`, `TickScheduler`, `SnapshotStore`), so a
//!    seeded session is fully reproducible.
//!
//! 3. **Configuration Over Constants**: Timer length, board layout,
//!    scoring and team limits live in `SessionConfig`, loadable from TOML.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration, teams
//! - `cards`: Categories, cards, the catalog and the deck
//! - `timer`: Countdown state machine and tick scheduling
//! - `roster`: Team list and turn rotation
//! - `board`: Linear track, special squares and win detection
//! - `session`: The orchestrator, events, snapshots and stores

pub mod board;
pub mod cards;
pub mod core;
pub mod roster;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    DicePolicy, GameError, GameRng, InvalidState, PersistenceError, Result, SessionConfig, Team,
    TeamId, ValidationError, DEFAULT_STORAGE_KEY, TEAM_PALETTE,
};

pub use crate::cards::{Card, Catalog, Category, Deck, Draw};

pub use crate::timer::{
    Countdown, ManualScheduler, NullScheduler, Tick, TickScheduler, TickToken, TimerState,
};

pub use crate::roster::Roster;

pub use crate::board::{Board, Landing};

pub use crate::session::{
    EventLog, Events, FileStore, Intent, MemoryStore, NoopObserver, NullStore, Observer, Prompt,
    Session, SessionBuilder, SessionEvent, SessionPhase, Snapshot, SnapshotStore,
};
