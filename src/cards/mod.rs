//! Card system: prompt cards, the catalog they come from, and the deck.
//!
//! ## Key Types
//!
//! - `Category`: Fixed set of topical categories
//! - `Card`: Immutable prompt (category, word, derived id)
//! - `Catalog`: Static category → word tables
//! - `Deck`: Shuffled cards with per-cycle draw tracking

pub mod catalog;
pub mod deck;
pub mod definition;

pub use catalog::Catalog;
pub use deck::{Deck, Draw};
pub use definition::{Card, Category};
