//! Compiler-plugin matching and annotation processor path extraction.
//!
//! The two operations here form the crate's public pipeline:
//!
//! 1. [`is_compiler_plugin`] filters a project's plugin list down to the
//!    Maven compiler plugin.
//! 2. [`extract_annotation_processors`] parses the matched plugin's
//!    `annotationProcessorPaths` configuration sub-tree and resolves each
//!    `path` entry into an artifact through the caller's
//!    [`ArtifactResolver`].
//!
//! Callers are expected to run the predicate first and only hand matching
//! plugins to the extractor; the extractor re-validates defensively and
//! rejects non-matching plugins outright.

use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, trace};

use crate::constants::{
    COMPILER_PLUGIN_ARTIFACT_ID, COMPILER_PLUGIN_GROUP_ID, PROCESSOR_PACKAGING,
};
use crate::core::ProcpathError;
use crate::models::{ArtifactCoordinate, Plugin, PluginConfiguration};
use crate::resolver::ArtifactResolver;

/// Name of the configuration child holding the processor path entries.
const ANNOTATION_PROCESSOR_PATHS: &str = "annotationProcessorPaths";

/// Name of one processor path entry under `annotationProcessorPaths`.
const PATH: &str = "path";

/// Coordinate sub-field node names within a `path` entry.
const GROUP_ID: &str = "groupId";
const ARTIFACT_ID: &str = "artifactId";
const VERSION: &str = "version";

/// Check whether a plugin descriptor names the Maven compiler plugin.
///
/// Matches on exact, case-sensitive equality of the group and artifact
/// identifiers against [`COMPILER_PLUGIN_GROUP_ID`] and
/// [`COMPILER_PLUGIN_ARTIFACT_ID`]. The version is deliberately not
/// consulted: every version of the compiler plugin matches.
///
/// Pure predicate, no side effects.
///
/// # Errors
///
/// [`ProcpathError::MissingArgument`] when `plugin` is `None`.
pub fn is_compiler_plugin(plugin: Option<&Plugin>) -> Result<bool> {
    let plugin = plugin.ok_or(ProcpathError::MissingArgument {
        name: "plugin",
    })?;
    Ok(plugin.group_id == COMPILER_PLUGIN_GROUP_ID
        && plugin.artifact_id == COMPILER_PLUGIN_ARTIFACT_ID)
}

/// Extract and resolve the annotation processor path coordinates configured
/// on the Maven compiler plugin.
///
/// Walks every `annotationProcessorPaths` child of the plugin's configuration
/// tree and, for each `path` entry beneath it, forms a
/// `(groupId, artifactId, version)` coordinate - sub-fields missing from the
/// entry default to the empty string - and resolves it with the fixed
/// [`PROCESSOR_PACKAGING`] type. Resolved artifacts are collected into a set,
/// so duplicates collapse under the resolver's own equality semantics.
///
/// A plugin without a configuration payload, or whose configuration has no
/// `annotationProcessorPaths` node, yields an empty set; both are ordinary
/// configurations, not errors.
///
/// Entries are resolved sequentially in document order. Each resolution is
/// independent; the first resolver failure aborts the call and propagates
/// unchanged.
///
/// # Errors
///
/// - [`ProcpathError::MissingArgument`] when `resolver` or `plugin` is
///   `None` (checked in that order).
/// - [`ProcpathError::NotCompilerPlugin`] when the plugin fails
///   [`is_compiler_plugin`].
/// - [`ProcpathError::UnsupportedConfiguration`] when a configuration payload
///   is present but not tree-shaped.
/// - Any error returned by the resolver, passed through as-is.
pub fn extract_annotation_processors<R: ArtifactResolver>(
    resolver: Option<&R>,
    plugin: Option<&Plugin>,
) -> Result<HashSet<R::Artifact>> {
    let resolver = resolver.ok_or(ProcpathError::MissingArgument {
        name: "resolver",
    })?;
    let plugin = plugin.ok_or(ProcpathError::MissingArgument {
        name: "plugin",
    })?;
    if !is_compiler_plugin(Some(plugin))? {
        return Err(ProcpathError::NotCompilerPlugin {
            group_id: plugin.group_id.clone(),
            artifact_id: plugin.artifact_id.clone(),
            version: plugin.version.clone(),
        }
        .into());
    }

    let Some(configuration) = &plugin.configuration else {
        debug!("plugin {plugin} has no configuration, no processor paths to extract");
        return Ok(HashSet::new());
    };
    let config = match configuration {
        PluginConfiguration::Tree(node) => node,
        PluginConfiguration::Opaque(_) => {
            return Err(ProcpathError::UnsupportedConfiguration {
                payload_type: configuration.type_name().to_string(),
            }
            .into());
        }
    };

    let mut artifacts = HashSet::new();
    for entry in config
        .children_named(ANNOTATION_PROCESSOR_PATHS)
        .flat_map(|paths| paths.children_named(PATH))
    {
        let coordinate = ArtifactCoordinate::new(
            entry.child_value(GROUP_ID).unwrap_or_default(),
            entry.child_value(ARTIFACT_ID).unwrap_or_default(),
            entry.child_value(VERSION).unwrap_or_default(),
        );
        trace!("resolving annotation processor path {coordinate}");
        artifacts.insert(resolver.resolve(&coordinate, PROCESSOR_PACKAGING)?);
    }
    debug!("extracted {} annotation processor artifact(s) from {plugin}", artifacts.len());
    Ok(artifacts)
}
