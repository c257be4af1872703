//! User intents: the inputs the presentation layer sends to a session.

/// A discrete user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    AddTeam(String),
    DrawCard,
    CardSuccess,
    SkipCard,
    RollDice,
    ToggleTimer,
    SetActiveTeam(usize),
    ResetSession,
    Acknowledge,
}

impl Intent {
    /// Keyboard shortcut mapping.
    ///
    /// Space toggles the timer; `c` draws, `s` marks success, `k` skips,
    /// `r` rolls. Letters are case-insensitive.
    ///
    /// ```
    /// use astro_pictionary::session::Intent;
    ///
    /// assert_eq!(Intent::from_key(' '), Some(Intent::ToggleTimer));
    /// assert_eq!(Intent::from_key('K'), Some(Intent::SkipCard));
    /// assert_eq!(Intent::from_key('x'), None);
    /// ```
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            ' ' => Some(Intent::ToggleTimer),
            'c' => Some(Intent::DrawCard),
            's' => Some(Intent::CardSuccess),
            'k' => Some(Intent::SkipCard),
            'r' => Some(Intent::RollDice),
            _ => None,
        }
    }
}
