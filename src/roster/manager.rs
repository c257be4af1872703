//! Team roster and turn order.
//!
//! Teams play in the order they joined. The active-team pointer moves
//! strictly round-robin; scores and positions never reorder the roster.

use rustc_hash::FxHashSet;

use crate::core::{Result, Team, TeamId, ValidationError};

/// Ordered teams plus the active-team pointer.
///
/// Invariant: `current < teams.len()` whenever the roster is non-empty.
///
/// ## Example
///
/// ```
/// use astro_pictionary::roster::Roster;
///
/// let mut roster = Roster::new(8, vec!["#f44336".into(), "#2196f3".into()]);
/// roster.add_team("Alpha").unwrap();
/// roster.add_team("Beta").unwrap();
///
/// assert_eq!(roster.active_team().unwrap().name, "Alpha");
/// roster.advance();
/// assert_eq!(roster.active_team().unwrap().name, "Beta");
/// roster.advance();
/// assert_eq!(roster.active_team().unwrap().name, "Alpha");
/// ```
#[derive(Clone, Debug)]
pub struct Roster {
    teams: Vec<Team>,
    current: usize,
    next_id: u32,
    capacity: usize,
    palette: Vec<String>,
}

impl Roster {
    /// Create an empty roster.
    ///
    /// Colours are taken from `palette` by join order; callers provide at
    /// least `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize, palette: Vec<String>) -> Self {
        Self {
            teams: Vec::new(),
            current: 0,
            next_id: 1,
            capacity,
            palette,
        }
    }

    /// Append a new team.
    ///
    /// The name is trimmed. Rejects empty names, case-insensitive
    /// duplicates, and a full roster.
    pub fn add_team(&mut self, name: &str) -> Result<&Team> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.teams.len() >= self.capacity {
            return Err(ValidationError::RosterFull {
                capacity: self.capacity,
            }
            .into());
        }
        let folded = name.to_lowercase();
        if self.teams.iter().any(|t| t.name.to_lowercase() == folded) {
            return Err(ValidationError::DuplicateName(name.to_string()).into());
        }

        let next_id = self
            .next_id
            .checked_add(1)
            .ok_or(ValidationError::TeamIdsExhausted)?;

        let color = self
            .palette
            .get(self.teams.len())
            .cloned()
            .unwrap_or_default();
        let id = TeamId::new(self.next_id);
        self.next_id = next_id;

        self.teams.push(Team::new(id, name, color));
        Ok(&self.teams[self.teams.len() - 1])
    }

    /// Team whose turn it is.
    #[must_use]
    pub fn active_team(&self) -> Option<&Team> {
        self.teams.get(self.current)
    }

    /// Index of the active team. Meaningless when the roster is empty.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.current
    }

    /// Make the team at `index` active.
    pub fn set_active(&mut self, index: usize) -> Result<()> {
        if index >= self.teams.len() {
            return Err(ValidationError::TeamIndexOutOfRange {
                index,
                len: self.teams.len(),
            }
            .into());
        }
        self.current = index;
        Ok(())
    }

    /// Pass the turn to the next team in join order.
    ///
    /// Returns whether the active team changed (false for empty or
    /// single-team rosters).
    pub fn advance(&mut self) -> bool {
        if self.teams.is_empty() {
            return false;
        }
        let next = (self.current + 1) % self.teams.len();
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Look up a team.
    #[must_use]
    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Look up a team mutably.
    pub fn get_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Teams in turn order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every team.
    pub fn clear(&mut self) {
        self.teams.clear();
        self.current = 0;
        self.next_id = 1;
    }

    /// Replace the roster with persisted teams.
    ///
    /// Rejects rosters over capacity, case-insensitive duplicate names,
    /// repeated ids and `u32::MAX` ids with a description of the problem.
    /// An out-of-range `current` falls back to the first team.
    pub fn restore(&mut self, teams: Vec<Team>, current: usize) -> std::result::Result<(), String> {
        if teams.len() > self.capacity {
            return Err(format!(
                "{} teams exceeds capacity {}",
                teams.len(),
                self.capacity
            ));
        }
        let mut names = FxHashSet::default();
        let mut ids = FxHashSet::default();
        for team in &teams {
            if team.name.trim().is_empty() {
                return Err(format!("team {} has an empty name", team.id));
            }
            if !names.insert(team.name.to_lowercase()) {
                return Err(format!("duplicate team name {:?}", team.name));
            }
            if !ids.insert(team.id) {
                return Err(format!("duplicate team id {}", team.id));
            }
            if team.id.raw() == u32::MAX {
                return Err(format!("team id {} out of range", team.id));
            }
        }

        self.next_id = teams.iter().map(|t| t.id.raw() + 1).max().unwrap_or(1);
        self.current = if current < teams.len() { current } else { 0 };
        self.teams = teams;
        Ok(())
    }
}
