//! The draw deck: every catalog card in shuffled order, drawn without
//! replacement until the cycle is exhausted.
//!
//! ## Draw Cycle
//!
//! The deck tracks which positions have been drawn in the current cycle.
//! Draws pick uniformly among the positions *not* yet drawn, so every
//! draw is O(1) and no card repeats within a cycle. Once every position
//! has been drawn, the next draw clears the cycle, reshuffles, and reports
//! the reshuffle to the caller.

use super::catalog::Catalog;
use super::definition::Card;
use crate::core::{GameRng, Result};

/// Result of a single draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    /// The card drawn.
    pub card: Card,
    /// Deck position the card was drawn from.
    pub index: usize,
    /// True when this draw started a new cycle.
    pub reshuffled: bool,
}

/// Shuffled card sequence plus the current cycle's drawn positions.
///
/// Invariants:
/// - `used` and `unused` partition `0..cards.len()`
/// - `used` holds positions in draw order
#[derive(Clone, Debug)]
pub struct Deck {
    catalog: Catalog,
    cards: Vec<Card>,
    used: Vec<usize>,
    unused: Vec<usize>,
    rng: GameRng,
}

impl Deck {
    /// Create an unbuilt deck over `catalog`.
    ///
    /// The deck builds itself on first draw; call [`Deck::build`] to
    /// surface catalog errors earlier.
    #[must_use]
    pub fn new(catalog: Catalog, rng: GameRng) -> Self {
        Self {
            catalog,
            cards: Vec::new(),
            used: Vec::new(),
            unused: Vec::new(),
            rng,
        }
    }

    /// Populate from the catalog and shuffle.
    ///
    /// Replaces any prior deck and clears the cycle.
    pub fn build(&mut self) -> Result<()> {
        let cards = self.catalog.cards()?;
        self.cards = cards;
        self.shuffle();
        self.reset_cycle_positions();
        tracing::debug!(cards = self.cards.len(), "deck built");
        Ok(())
    }

    /// Apply a uniform random permutation to the card order.
    ///
    /// Drawn positions are positions, not cards: callers shuffle only when
    /// starting a new cycle.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }

    /// Draw a card not yet drawn this cycle.
    ///
    /// Builds the deck if it is empty and starts a new cycle (reshuffling)
    /// if every card has been drawn.
    pub fn draw(&mut self) -> Result<Draw> {
        if self.cards.is_empty() {
            self.build()?;
        }

        let mut reshuffled = false;
        if self.unused.is_empty() {
            self.shuffle();
            self.reset_cycle_positions();
            reshuffled = true;
            tracing::debug!(cards = self.cards.len(), "deck exhausted, reshuffled");
        }

        let pick = self.rng.gen_index(self.unused.len() - 1);
        let index = self.unused.swap_remove(pick);
        self.used.push(index);

        Ok(Draw {
            card: self.cards[index].clone(),
            index,
            reshuffled,
        })
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True before the first build.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.unused.len()
    }

    /// Positions drawn this cycle, in draw order.
    #[must_use]
    pub fn used_indices(&self) -> &[usize] {
        &self.used
    }

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card ids in deck order, for snapshots.
    #[must_use]
    pub fn order_ids(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.id.clone()).collect()
    }

    /// Rebuild a persisted deck from its card order and drawn positions.
    ///
    /// The order must be a permutation of the catalog; otherwise the deck
    /// is rebuilt fresh and `false` is returned. Out-of-range or repeated
    /// positions are dropped.
    pub fn restore(&mut self, order: &[String], used: &[usize]) -> Result<bool> {
        let catalog_cards = self.catalog.cards()?;

        let Some(cards) = reorder(catalog_cards, order) else {
            self.build()?;
            return Ok(false);
        };

        self.cards = cards;
        self.reset_cycle_positions();
        for &index in used {
            if let Some(pos) = self.unused.iter().position(|&u| u == index) {
                self.unused.swap_remove(pos);
                self.used.push(index);
            }
        }
        Ok(true)
    }

    fn reset_cycle_positions(&mut self) {
        self.used.clear();
        self.unused = (0..self.cards.len()).collect();
    }
}

/// Arrange `cards` in the order named by `order`, or `None` if `order`
/// is not a permutation of their ids.
fn reorder(cards: Vec<Card>, order: &[String]) -> Option<Vec<Card>> {
    if order.len() != cards.len() {
        return None;
    }
    let mut by_id: rustc_hash::FxHashMap<String, Card> =
        cards.into_iter().map(|c| (c.id.clone(), c)).collect();
    order.iter().map(|id| by_id.remove(id)).collect()
}
