//! procpath - Maven compiler-plugin annotation processor path extraction
//!
//! A small library that identifies the Maven compiler plugin among a project's
//! configured build plugins and extracts the annotation processor path
//! coordinates from its nested configuration block, resolving each coordinate
//! into a concrete artifact through a caller-supplied resolver.
//!
//! # Architecture Overview
//!
//! The crate is a two-step pipeline consumed by an orchestrating caller:
//!
//! 1. [`compiler::is_compiler_plugin`] - a pure predicate that decides whether
//!    a plugin descriptor names the Maven compiler plugin (any version).
//! 2. [`compiler::extract_annotation_processors`] - walks the matched plugin's
//!    `annotationProcessorPaths` configuration sub-tree, forms one
//!    `(groupId, artifactId, version)` coordinate per `path` entry (absent
//!    sub-fields default to the empty string), and resolves each through an
//!    [`resolver::ArtifactResolver`] into a deduplicated set of artifacts.
//!
//! The caller owns everything around this pipeline: reading the project's
//! plugin list, filtering with the predicate, and deciding what to do with the
//! resolved artifacts (typically placing them on a compiler processor path).
//! Downloading, verification, and interpretation of any other configuration
//! schema are explicitly out of scope.
//!
//! # Core Modules
//!
//! - [`compiler`] - plugin matching and processor path extraction
//! - [`models`] - plugin descriptors, configuration trees, and coordinates
//! - [`resolver`] - the artifact resolution seam
//! - [`core`] - error types shared across the crate
//! - [`constants`] - well-known plugin identity and packaging values
//!
//! # Example
//!
//! ```rust
//! use procpath::compiler::{extract_annotation_processors, is_compiler_plugin};
//! use procpath::models::{ArtifactCoordinate, ConfigNode, Plugin, PluginConfiguration};
//! use procpath::resolver::ArtifactResolver;
//!
//! /// Resolver that treats the coordinate itself as the resolved artifact.
//! struct CoordinateResolver;
//!
//! impl ArtifactResolver for CoordinateResolver {
//!     type Artifact = ArtifactCoordinate;
//!
//!     fn resolve(
//!         &self,
//!         coordinate: &ArtifactCoordinate,
//!         _packaging: &str,
//!     ) -> anyhow::Result<Self::Artifact> {
//!         Ok(coordinate.clone())
//!     }
//! }
//!
//! let configuration = ConfigNode::new("configuration").with_child(
//!     ConfigNode::new("annotationProcessorPaths").with_child(
//!         ConfigNode::new("path")
//!             .with_child(ConfigNode::new("groupId").with_value("org.mapstruct"))
//!             .with_child(ConfigNode::new("artifactId").with_value("mapstruct-processor"))
//!             .with_child(ConfigNode::new("version").with_value("1.5.5.Final")),
//!     ),
//! );
//!
//! let plugin = Plugin::new("org.apache.maven.plugins", "maven-compiler-plugin", "3.13.0")
//!     .with_configuration(PluginConfiguration::Tree(configuration));
//!
//! assert!(is_compiler_plugin(Some(&plugin)).unwrap());
//!
//! let artifacts =
//!     extract_annotation_processors(Some(&CoordinateResolver), Some(&plugin)).unwrap();
//! assert_eq!(artifacts.len(), 1);
//! ```

// Core functionality modules
pub mod compiler;
pub mod constants;
pub mod core;
pub mod resolver;

// Supporting modules
pub mod models;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
