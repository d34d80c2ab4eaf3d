//! Data model for plugin descriptors, configuration trees, and coordinates.
//!
//! These types model the inputs and intermediate values of the extraction
//! pipeline:
//!
//! - [`Plugin`] - a build-plugin descriptor as it appears in a project's
//!   plugin list: coordinates plus an optional, untyped configuration payload.
//!   Constructed and owned by the caller; this crate only reads it.
//! - [`PluginConfiguration`] - the configuration payload, tagged at the
//!   boundary as either the one recognized tree shape or an opaque value the
//!   crate will reject explicitly.
//! - [`ConfigNode`] - a generic ordered tree node with a name, an optional
//!   text value, and repeatable named children, modeling nested build
//!   configuration the way an XML configuration block nests.
//! - [`ArtifactCoordinate`] - the `(groupId, artifactId, version)` triple
//!   identifying a dependency. Fields may be empty but are never absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A build-plugin descriptor: coordinates plus an optional configuration
/// payload.
///
/// Instances are caller-owned, read-only inputs. The configuration payload is
/// untyped on purpose - build files can put anything there - and is only
/// interpreted by [`crate::compiler::extract_annotation_processors`], which
/// accepts the recognized tree shape and rejects everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    /// Group identifier of the plugin.
    pub group_id: String,
    /// Artifact identifier of the plugin.
    pub artifact_id: String,
    /// Version of the plugin, treated as an opaque string.
    pub version: String,
    /// Configuration payload, absent when the build file supplies none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<PluginConfiguration>,
}

impl Plugin {
    /// Create a plugin descriptor without a configuration payload.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            configuration: None,
        }
    }

    /// Attach a configuration payload to the descriptor.
    #[must_use]
    pub fn with_configuration(mut self, configuration: PluginConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A plugin's configuration payload, tagged by shape at the boundary.
///
/// Build-tool configuration is schemaless; rather than probing types deep in
/// the extraction path, the payload is classified once, here. Only
/// [`PluginConfiguration::Tree`] is interpreted further. An absent payload is
/// modeled as `None` on [`Plugin::configuration`], not as a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginConfiguration {
    /// The recognized nested-tree configuration shape.
    Tree(ConfigNode),
    /// A payload of some other shape, kept verbatim for diagnostics.
    Opaque(serde_json::Value),
}

impl PluginConfiguration {
    /// Short description of the payload shape, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Tree(_) => "tree",
            Self::Opaque(value) => match value {
                serde_json::Value::Null => "null",
                serde_json::Value::Bool(_) => "boolean",
                serde_json::Value::Number(_) => "number",
                serde_json::Value::String(_) => "string",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object",
            },
        }
    }
}

/// A generic ordered configuration tree node.
///
/// Nodes have a name, an optional text value, and an ordered sequence of
/// children. Children with the same name may repeat and their order is
/// preserved - repeated siblings are significant (each `path` sibling under
/// `annotationProcessorPaths` becomes one coordinate candidate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigNode {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create a node with the given name, no value, and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Set the node's text value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Append a child node, preserving insertion order.
    #[must_use]
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node in place.
    pub fn push_child(&mut self, child: ConfigNode) {
        self.children.push(child);
    }

    /// The node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's text value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// All children in document order.
    #[must_use]
    pub fn children(&self) -> &[ConfigNode] {
        &self.children
    }

    /// All children with the given name, in document order.
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a ConfigNode> + use<'a, 'n> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// The first child with the given name, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children_named(name).next()
    }

    /// The text value of the first child with the given name.
    ///
    /// `None` when no such child exists or the child has no value.
    #[must_use]
    pub fn child_value(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(ConfigNode::value)
    }
}

/// The `(groupId, artifactId, version)` triple identifying a dependency.
///
/// Every field is an owned string that may be empty but is never absent -
/// sub-fields missing from the configuration tree are defaulted to `""` so
/// malformed entries surface at resolution time with a visible coordinate
/// instead of silently vanishing. No further validation happens here; fields
/// are opaque strings as far as this crate is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactCoordinate {
    /// Group identifier, possibly empty.
    pub group_id: String,
    /// Artifact identifier, possibly empty.
    pub artifact_id: String,
    /// Version string, possibly empty.
    pub version: String,
}

impl ArtifactCoordinate {
    /// Create a coordinate from its three fields.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
