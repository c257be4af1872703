//! Card catalog - the static category → word tables a deck is built from.
//!
//! `Catalog::astronomy()` is the standard game. Hosts and tests can build
//! their own catalog from any category tables; `cards()` checks the tables
//! are usable before a deck is built from them.

use rustc_hash::FxHashSet;

use super::definition::{Card, Category};
use crate::core::{GameError, Result};

const PLANETS_AND_SOLAR_SYSTEM: &[&str] = &[
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
    "Sun", "Moon", "Solar System", "Orbit", "Ring System", "Asteroid Belt",
    "Pluto", "Dwarf Planet", "Terrestrial Planet", "Gas Giant", "Ice Giant",
    "Lunar Eclipse", "Solar Eclipse", "Phases of Moon", "Tidal Force", "Solar Wind",
    "Spacecraft", "Satellite", "Comet Tail", "Planetary Alignment",
];

const STARS_AND_CONSTELLATIONS: &[&str] = &[
    "Big Dipper", "Orion", "Polaris", "North Star", "Supernova", "White Dwarf",
    "Red Giant", "Neutron Star", "Binary Star", "Star Cluster", "Milky Way",
    "Cassiopeia", "Ursa Major", "Ursa Minor", "Leo", "Scorpius", "Andromeda",
    "Southern Cross", "Sirius", "Betelgeuse", "Rigel", "Vega", "Altair",
    "Constellation", "Star Formation", "Stellar Evolution", "Magnitude",
];

const SPACE_OBJECTS: &[&str] = &[
    "Galaxy", "Nebula", "Black Hole", "Comet", "Asteroid", "Meteor", "Meteorite",
    "Shooting Star", "Quasar", "Pulsar", "Supermassive Black Hole", "Dark Matter",
    "Dark Energy", "Cosmic Ray", "Interstellar Medium", "Planetary Nebula",
    "Globular Cluster", "Open Cluster", "Spiral Galaxy", "Elliptical Galaxy",
    "Galaxy Collision", "Cosmic Dust", "Space Debris", "Wormhole",
];

const SPACE_EXPLORATION: &[&str] = &[
    "Rocket", "Satellite", "Space Station", "Astronaut", "Space Shuttle",
    "Space Suit", "Mission Control", "Launch Pad", "Spacecraft", "Rover",
    "Telescope", "Hubble", "ISS", "Apollo", "NASA", "ESA", "SpaceX",
    "Lunar Module", "Command Module", "Heat Shield", "Parachute", "Docking",
    "Space Walk", "Orbit Insertion", "Re-entry", "Rocket Booster",
];

const PHENOMENA: &[&str] = &[
    "Aurora", "Northern Lights", "Southern Lights", "Meteor Shower", "Solar Flare",
    "Coronal Mass Ejection", "Sunspot", "Solar Storm", "Tide", "Gravity",
    "Weightlessness", "Radiation", "Cosmic Background Radiation", "Redshift",
    "Blueshift", "Doppler Effect", "Parallax", "Transit", "Occultation",
    "Time Dilation", "Event Horizon", "Gravitational Waves", "Solar Maximum",
];

/// Ordered category tables.
///
/// ## Example
///
/// ```
/// use astro_pictionary::cards::{Catalog, Category};
///
/// let catalog = Catalog::new()
///     .with_category(Category::SpaceObjects, ["Comet", "Nebula"])
///     .with_category(Category::Phenomena, ["Aurora"]);
///
/// let cards = catalog.cards().unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0].word, "Comet");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    tables: Vec<(Category, Vec<String>)>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard astronomy word tables.
    #[must_use]
    pub fn astronomy() -> Self {
        Self::new()
            .with_category(Category::PlanetsAndSolarSystem, PLANETS_AND_SOLAR_SYSTEM.iter().copied())
            .with_category(Category::StarsAndConstellations, STARS_AND_CONSTELLATIONS.iter().copied())
            .with_category(Category::SpaceObjects, SPACE_OBJECTS.iter().copied())
            .with_category(Category::SpaceExploration, SPACE_EXPLORATION.iter().copied())
            .with_category(Category::Phenomena, PHENOMENA.iter().copied())
    }

    /// Append a category table (builder pattern).
    #[must_use]
    pub fn with_category<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .push((category, words.into_iter().map(Into::into).collect()));
        self
    }

    /// Number of category tables.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.tables.len()
    }

    /// Total number of words across all tables.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.tables.iter().map(|(_, words)| words.len()).sum()
    }

    /// Iterate over `(category, words)` tables in order.
    pub fn tables(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.tables.iter().map(|(c, w)| (*c, w.as_slice()))
    }

    /// Expand the tables into cards, in table order.
    ///
    /// Fails when the catalog has no tables, when a table is empty, or when
    /// the same (category, word) pair appears twice.
    pub fn cards(&self) -> Result<Vec<Card>> {
        if self.tables.is_empty() {
            return Err(GameError::Configuration("card catalog has no categories".into()));
        }

        let mut seen: FxHashSet<(Category, &str)> = FxHashSet::default();
        let mut cards = Vec::with_capacity(self.word_count());

        for (category, words) in &self.tables {
            if words.is_empty() {
                return Err(GameError::Configuration(format!(
                    "category {category:?} has no words"
                )));
            }
            for word in words {
                if !seen.insert((*category, word.as_str())) {
                    return Err(GameError::Configuration(format!(
                        "duplicate card {word:?} in {category}"
                    )));
                }
                cards.push(Card::new(*category, word.as_str()));
            }
        }

        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_astronomy_tables() {
        let catalog = Catalog::astronomy();
        assert_eq!(catalog.category_count(), 5);
        assert_eq!(catalog.word_count(), 28 + 27 + 24 + 26 + 23);

        let categories: Vec<_> = catalog.tables().map(|(c, _)| c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_astronomy_cards_are_unique() {
        let cards = Catalog::astronomy().cards().unwrap();
        let ids: FxHashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_empty_category_rejected() {
        let catalog = Catalog::new()
            .with_category(Category::SpaceObjects, ["Comet"])
            .with_category(Category::Phenomena, Vec::<String>::new());

        let err = catalog.cards().unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(Catalog::new().cards().is_err());
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let catalog = Catalog::new().with_category(Category::SpaceObjects, ["Comet", "Comet"]);
        assert!(catalog.cards().is_err());
    }

    #[test]
    fn test_same_word_across_categories_allowed() {
        let catalog = Catalog::new()
            .with_category(Category::PlanetsAndSolarSystem, ["Satellite"])
            .with_category(Category::SpaceExploration, ["Satellite"]);
        assert_eq!(catalog.cards().unwrap().len(), 2);
    }
}
