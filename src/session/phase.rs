//! Session-level phase and pending prompts.

use serde::{Deserialize, Serialize};

use crate::core::TeamId;

/// A prompt shown to the players that defers a turn change until it is
/// acknowledged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Prompt {
    /// The team landed on a special space; the turn passes on acknowledgement.
    BonusTurn { team: TeamId },
    /// The countdown ran out with a card showing; acknowledging clears the
    /// card and passes the turn.
    TimeUp,
}

/// Where the session is in its lifecycle.
///
/// ```text
/// NoTeams -> Setup -> InTurn -> (Setup | BonusPrompt | TimeUp) -> ... -> Won
/// ```
///
/// `Won` is left only by resetting the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NoTeams,
    /// Teams exist, no card showing.
    Setup,
    /// A card is showing.
    InTurn,
    BonusPrompt,
    TimeUp,
    Won(TeamId),
}
