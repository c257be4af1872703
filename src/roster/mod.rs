//! Team roster: creation, validation, and round-robin turn order.

pub mod manager;

pub use manager::Roster;
