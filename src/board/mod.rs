//! Race track rules: movement, special spaces, and the finish line.
//!
//! Positions live on each `Team`; the board only knows the track layout.

pub mod track;

pub use track::{Board, Landing};
