//! Test utilities for procpath.
//!
//! This module provides helpers for writing tests against the extraction
//! pipeline: resolver test doubles, canned configuration-tree fixtures, and
//! one-time logging initialization. It is compiled for in-crate unit tests
//! and, via the `test-utils` feature, for the integration test suite.

pub mod fixtures;
pub mod resolvers;

pub use fixtures::{compiler_plugin, path_node, processor_paths_config};
pub use resolvers::{FailingResolver, RecordingResolver, ResolvedArtifact};

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Initializes the tracing subscriber at most once regardless of how many
/// times it is called. Respects the `RUST_LOG` environment variable when no
/// explicit level is given; does nothing when neither is set.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}
