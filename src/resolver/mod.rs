//! The artifact resolution seam.
//!
//! Turning a coordinate triple into a concrete artifact is the job of an
//! external collaborator - a repository system, a cache, a test double - not
//! of this crate. [`ArtifactResolver`] is the narrow contract that seam is
//! written against.
//!
//! The resolved handle is an associated type so it stays opaque to this
//! crate: the extractor collects handles into a `HashSet`, which means
//! deduplication follows whatever identity/equality semantics the
//! collaborator's artifact type defines, hence the `Eq + Hash` bound.
//!
//! Resolution is synchronous from this crate's viewpoint. If a collaborator
//! performs blocking work (network, disk), and whether it applies timeouts or
//! cancellation, is entirely its own business. Resolver failures are not
//! interpreted or wrapped here; they propagate unchanged to the caller of
//! [`crate::compiler::extract_annotation_processors`].

use std::hash::Hash;

use anyhow::Result;

use crate::models::ArtifactCoordinate;

/// Collaborator that turns a coordinate triple plus packaging type into a
/// resolved artifact handle.
///
/// Coordinate fields arrive exactly as extracted - possibly empty, never
/// absent. Rejecting malformed coordinates is the resolver's prerogative,
/// not the extractor's.
pub trait ArtifactResolver {
    /// The resolved artifact handle this collaborator produces.
    type Artifact: Eq + Hash;

    /// Resolve one coordinate with the given packaging type.
    fn resolve(&self, coordinate: &ArtifactCoordinate, packaging: &str) -> Result<Self::Artifact>;
}
