//! Track layout and movement.

use crate::core::{GameError, Result, TeamId, SPECIAL_SPACES};
use crate::roster::Roster;

/// Where a move ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landing {
    pub team: TeamId,
    pub from: u32,
    pub to: u32,
    /// Reached the finish. Takes precedence over `special`.
    pub won: bool,
    /// Stopped on a bonus-draw square (never set when `won`).
    pub special: bool,
}

/// Linear track from square 0 to `length`, with bonus squares.
///
/// ## Example
///
/// ```
/// use astro_pictionary::board::Board;
///
/// let board = Board::standard();
/// assert!(board.is_special_space(3));
/// assert!(!board.is_special_space(4));
/// assert!(board.has_won(50));
/// assert_eq!(board.clamp(57), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    length: u32,
    special_spaces: Vec<u32>,
}

impl Board {
    /// Create a track. `special_spaces` must be sorted.
    #[must_use]
    pub fn new(length: u32, special_spaces: Vec<u32>) -> Self {
        Self {
            length,
            special_spaces,
        }
    }

    /// 50 squares with the standard bonus squares.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(50, SPECIAL_SPACES.to_vec())
    }

    /// Finish square.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[must_use]
    pub fn special_spaces(&self) -> &[u32] {
        &self.special_spaces
    }

    #[must_use]
    pub fn is_special_space(&self, position: u32) -> bool {
        self.special_spaces.binary_search(&position).is_ok()
    }

    #[must_use]
    pub fn has_won(&self, position: u32) -> bool {
        position >= self.length
    }

    /// Clamp a position onto the track.
    #[must_use]
    pub fn clamp(&self, position: u32) -> u32 {
        position.min(self.length)
    }

    /// Move a team forward `spaces` squares, stopping at the finish.
    pub fn move_team(&self, roster: &mut Roster, team: TeamId, spaces: u32) -> Result<Landing> {
        let Some(entry) = roster.get_mut(team) else {
            tracing::warn!(%team, "move requested for unknown team");
            return Err(GameError::NotFound { team });
        };

        let from = entry.position;
        let to = self.clamp(from.saturating_add(spaces));
        entry.position = to;

        let won = self.has_won(to);
        let special = !won && self.is_special_space(to);
        tracing::debug!(%team, from, to, won, special, "team moved");

        Ok(Landing {
            team,
            from,
            to,
            won,
            special,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TEAM_PALETTE;

    fn roster_with(names: &[&str]) -> Roster {
        let mut roster = Roster::new(8, TEAM_PALETTE.iter().map(|c| (*c).to_string()).collect());
        for name in names {
            roster.add_team(name).unwrap();
        }
        roster
    }

    #[test]
    fn test_special_spaces() {
        let board = Board::standard();
        for s in SPECIAL_SPACES {
            assert!(board.is_special_space(s));
        }
        assert!(!board.is_special_space(0));
        assert!(!board.is_special_space(50));
        assert!(!board.is_special_space(48));
    }

    #[test]
    fn test_move_clamps_to_finish() {
        let board = Board::standard();
        let mut roster = roster_with(&["Alpha"]);
        let id = roster.teams()[0].id;

        roster.get_mut(id).unwrap().position = 47;
        let landing = board.move_team(&mut roster, id, 6).unwrap();

        assert_eq!(landing.from, 47);
        assert_eq!(landing.to, 50);
        assert!(landing.won);
        assert!(!landing.special);
        assert_eq!(roster.get(id).unwrap().position, 50);
    }

    #[test]
    fn test_move_onto_special() {
        let board = Board::standard();
        let mut roster = roster_with(&["Alpha"]);
        let id = roster.teams()[0].id;

        let landing = board.move_team(&mut roster, id, 3).unwrap();
        assert!(landing.special);
        assert!(!landing.won);
    }

    #[test]
    fn test_move_unknown_team() {
        let board = Board::standard();
        let mut roster = roster_with(&["Alpha"]);
        let err = board.move_team(&mut roster, TeamId::new(999), 1).unwrap_err();
        assert!(matches!(err, GameError::NotFound { .. }));
    }

    #[test]
    fn test_zero_spaces_is_no_move() {
        let board = Board::standard();
        let mut roster = roster_with(&["Alpha"]);
        let id = roster.teams()[0].id;

        let landing = board.move_team(&mut roster, id, 0).unwrap();
        assert_eq!(landing.from, landing.to);
    }
}
