//! Team identification and per-team record.
//!
//! ## TeamId
//!
//! Stable identifier for a team for as long as the team exists. Ids are
//! handed out by the roster and never reused within a session.
//!
//! ## Team
//!
//! Mutable scoreboard entry: score, board position and guess statistics.

use serde::{Deserialize, Serialize};

/// Team identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// A team taking part in the race.
///
/// `position` only ever grows and is clamped to the board length by
/// [`Board`](crate::board::Board); `score` grows by the configured points
/// per successful guess.
///
/// ## Example
///
/// ```
/// use astro_pictionary::core::{Team, TeamId};
///
/// let mut team = Team::new(TeamId::new(1), "Alpha", "#f44336");
/// team.successful_guesses = 3;
/// team.skipped_cards = 1;
///
/// assert_eq!(team.success_rate(), 75);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub successful_guesses: u32,
    #[serde(default)]
    pub skipped_cards: u32,
}

impl Team {
    /// Create a fresh team at the start square.
    pub fn new(id: TeamId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            score: 0,
            position: 0,
            successful_guesses: 0,
            skipped_cards: 0,
        }
    }

    /// Cards resolved by this team, guessed or skipped.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.successful_guesses.saturating_add(self.skipped_cards)
    }

    /// Percentage of resolved cards that were guessed, rounded.
    ///
    /// Zero when the team has not resolved any card yet.
    #[must_use]
    pub fn success_rate(&self) -> u32 {
        let attempts = self.attempts();
        if attempts == 0 {
            return 0;
        }
        ((f64::from(self.successful_guesses) / f64::from(attempts)) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_basics() {
        let id = TeamId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(format!("{}", id), "Team(3)");
    }

    #[test]
    fn test_new_team_starts_clean() {
        let team = Team::new(TeamId::new(0), "Comets", "#2196f3");
        assert_eq!(team.score, 0);
        assert_eq!(team.position, 0);
        assert_eq!(team.attempts(), 0);
        assert_eq!(team.success_rate(), 0);
    }

    #[test]
    fn test_success_rate_rounds() {
        let mut team = Team::new(TeamId::new(0), "Comets", "#2196f3");
        team.successful_guesses = 2;
        team.skipped_cards = 1;
        assert_eq!(team.success_rate(), 67);

        team.successful_guesses = 0;
        assert_eq!(team.success_rate(), 0);
    }

    #[test]
    fn test_attempts_saturate() {
        let mut team = Team::new(TeamId::new(0), "Comets", "#2196f3");
        team.successful_guesses = u32::MAX;
        team.skipped_cards = 3;
        assert_eq!(team.attempts(), u32::MAX);
        assert_eq!(team.success_rate(), 100);
    }

    #[test]
    fn test_team_serialization_is_camel_case() {
        let mut team = Team::new(TeamId::new(5), "Nebula", "#4caf50");
        team.successful_guesses = 4;

        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["successfulGuesses"], 4);
        assert_eq!(json["skippedCards"], 0);

        let back: Team = serde_json::from_value(json).unwrap();
        assert_eq!(back, team);
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let json = r##"{"id": 1, "name": "Quasar", "color": "#ff9800"}"##;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.score, 0);
        assert_eq!(team.skipped_cards, 0);
    }
}
