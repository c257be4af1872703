//! Shared helpers for integration tests.

#![allow(dead_code)]

use astro_pictionary::{Catalog, Category, Session, SessionBuilder, SessionConfig};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test log subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Seeded config with default rules.
pub fn config(seed: u64) -> SessionConfig {
    SessionConfig::default().with_seed(seed)
}

/// Seeded session with the named teams already added.
pub fn session_with_teams(seed: u64, names: &[&str]) -> Session {
    init_logging();
    let mut session = SessionBuilder::new().config(config(seed)).build().unwrap();
    for name in names {
        session.add_team(name).unwrap();
    }
    session
}

/// Four-card catalog, small enough to enumerate permutations.
pub fn four_card_catalog() -> Catalog {
    Catalog::new().with_category(Category::Phenomena, ["Aurora", "Tide", "Gravity", "Eclipse"])
}
