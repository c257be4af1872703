//! Card values - a prompt word within a topical category.
//!
//! A `Card` is created once when the deck is built and never changes.
//! Its `id` is derived from category and word and exists for equality
//! checks and debugging only; deck order never depends on it.

use serde::{Deserialize, Serialize};

/// Topical category a prompt belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Planets & Solar System")]
    PlanetsAndSolarSystem,
    #[serde(rename = "Stars & Constellations")]
    StarsAndConstellations,
    #[serde(rename = "Space Objects")]
    SpaceObjects,
    #[serde(rename = "Space Exploration")]
    SpaceExploration,
    #[serde(rename = "Phenomena")]
    Phenomena,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::PlanetsAndSolarSystem,
        Category::StarsAndConstellations,
        Category::SpaceObjects,
        Category::SpaceExploration,
        Category::Phenomena,
    ];

    /// Display name shown on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::PlanetsAndSolarSystem => "Planets & Solar System",
            Category::StarsAndConstellations => "Stars & Constellations",
            Category::SpaceObjects => "Space Objects",
            Category::SpaceExploration => "Space Exploration",
            Category::Phenomena => "Phenomena",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A prompt card.
///
/// ## Example
///
/// ```
/// use astro_pictionary::cards::{Card, Category};
///
/// let card = Card::new(Category::SpaceObjects, "Black Hole");
/// assert_eq!(card.id, "space-objects-black-hole");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub category: Category,
    pub word: String,
    pub id: String,
}

impl Card {
    /// Create a card, deriving its id from category and word.
    pub fn new(category: Category, word: impl Into<String>) -> Self {
        let word = word.into();
        let id = card_id(category, &word);
        Self { category, word, id }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.word, self.category)
    }
}

/// `"{category}-{word}"` with whitespace runs collapsed to `-`, lowercased.
fn card_id(category: Category, word: &str) -> String {
    let raw = format!("{}-{}", category.name(), word);
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
