//! The session orchestrator and everything it hands to a host: intents in,
//! events out, snapshots to storage.
//!
//! ## Key Types
//!
//! - `Session`: Owns every component and applies user intents
//! - `SessionEvent`: Ordered notifications for the presentation layer
//! - `Snapshot`: The persisted JSON shape
//! - `SnapshotStore`: Keyed blob storage (memory, file, none)

pub mod engine;
pub mod events;
pub mod intent;
pub mod phase;
pub mod snapshot;
pub mod store;

pub use engine::{Session, SessionBuilder};
pub use events::{EventLog, Events, NoopObserver, Observer, SessionEvent};
pub use intent::Intent;
pub use phase::{Prompt, SessionPhase};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use store::{FileStore, MemoryStore, NullStore, SnapshotStore};
