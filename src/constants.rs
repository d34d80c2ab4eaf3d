//! Well-known identity values used by the matching and resolution logic.
//!
//! The plugin identity and the packaging type handed to the artifact resolver
//! are fixed by the Maven ecosystem. Defining them centrally keeps the
//! matching and resolution code auditable and free of magic literals.

/// Group identifier of the Maven compiler plugin.
pub const COMPILER_PLUGIN_GROUP_ID: &str = "org.apache.maven.plugins";

/// Artifact identifier of the Maven compiler plugin.
pub const COMPILER_PLUGIN_ARTIFACT_ID: &str = "maven-compiler-plugin";

/// Packaging type requested from the resolver for every annotation processor
/// path coordinate.
///
/// Processor path entries are plain dependency coordinates without an explicit
/// packaging of their own, so resolution always asks for a `jar`.
pub const PROCESSOR_PACKAGING: &str = "jar";
