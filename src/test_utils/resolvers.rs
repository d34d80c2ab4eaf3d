//! Resolver test doubles.
//!
//! [`RecordingResolver`] stands in for a real repository system: it echoes
//! each coordinate back as a [`ResolvedArtifact`] and counts how many times
//! it was invoked, so tests can assert both the resolved set and the exact
//! number of resolution calls. [`FailingResolver`] always errors, for tests
//! that pin down unchanged propagation of resolver failures.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};

use crate::models::ArtifactCoordinate;
use crate::resolver::ArtifactResolver;

/// Resolved artifact handle produced by the test resolvers.
///
/// Equality and hashing are by value, so a set of these deduplicates by
/// coordinate triple plus packaging - the behavior tests rely on when
/// counting distinct extraction results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedArtifact {
    /// The coordinate the resolver was asked for.
    pub coordinate: ArtifactCoordinate,
    /// The packaging type the resolver was asked for.
    pub packaging: String,
}

/// Resolver double that echoes coordinates back and records call counts.
#[derive(Debug, Default)]
pub struct RecordingResolver {
    calls: AtomicUsize,
}

impl RecordingResolver {
    /// Create a resolver with a zeroed call counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `resolve` invocations so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ArtifactResolver for RecordingResolver {
    type Artifact = ResolvedArtifact;

    fn resolve(&self, coordinate: &ArtifactCoordinate, packaging: &str) -> Result<Self::Artifact> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ResolvedArtifact {
            coordinate: coordinate.clone(),
            packaging: packaging.to_string(),
        })
    }
}

/// Resolver double whose every resolution fails.
#[derive(Debug, Default)]
pub struct FailingResolver;

impl ArtifactResolver for FailingResolver {
    type Artifact = ResolvedArtifact;

    fn resolve(&self, coordinate: &ArtifactCoordinate, _packaging: &str) -> Result<Self::Artifact> {
        bail!("artifact resolution failed for '{coordinate}'")
    }
}
