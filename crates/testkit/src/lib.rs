#![warn(missing_docs)]
//! In-memory host used by the bulkux test suites.
//!
//! Provides a recording [`TestWorld`], a [`TestPlayer`] with hotbar and
//! backpack, an [`TestExtensionPoints`] registry that dispatches crate clicks
//! the way the host would, and item fixtures in [`items`].

mod hooks;
pub mod items;
mod player;
mod world;

pub use hooks::*;
pub use player::*;
pub use world::*;

use tracing_subscriber::EnvFilter;

/// Install a test-friendly `tracing` subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
