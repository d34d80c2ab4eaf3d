//! Canned plugin and configuration-tree fixtures.

use crate::constants::{COMPILER_PLUGIN_ARTIFACT_ID, COMPILER_PLUGIN_GROUP_ID};
use crate::models::{ConfigNode, Plugin};

/// A compiler-plugin descriptor without a configuration payload.
pub fn compiler_plugin() -> Plugin {
    Plugin::new(COMPILER_PLUGIN_GROUP_ID, COMPILER_PLUGIN_ARTIFACT_ID, "3.8.1")
}

/// Build one `path` entry with the given coordinate sub-fields.
///
/// A `None` field omits the child node entirely; `Some("")` produces a child
/// with an empty value. The extractor collapses both to an empty coordinate
/// field, and fixtures cover both spellings.
pub fn path_node(
    group_id: Option<&str>,
    artifact_id: Option<&str>,
    version: Option<&str>,
) -> ConfigNode {
    let mut path = ConfigNode::new("path");
    if let Some(group_id) = group_id {
        path.push_child(ConfigNode::new("groupId").with_value(group_id));
    }
    if let Some(artifact_id) = artifact_id {
        path.push_child(ConfigNode::new("artifactId").with_value(artifact_id));
    }
    if let Some(version) = version {
        path.push_child(ConfigNode::new("version").with_value(version));
    }
    path
}

/// The canonical six-entry `annotationProcessorPaths` configuration.
///
/// One entry is fully specified (`myGroupId:myArtifactId:1.2.3`); the other
/// five each lack exactly one sub-field, either as an empty value or as a
/// missing child. After empty-string defaulting these collapse to four
/// distinct coordinate triples.
pub fn processor_paths_config() -> ConfigNode {
    let mut paths = ConfigNode::new("annotationProcessorPaths");
    paths.push_child(path_node(Some("myGroupId"), Some("myArtifactId"), Some("1.2.3")));
    paths.push_child(path_node(Some(""), Some("myArtifactId"), Some("1.2.3")));
    paths.push_child(path_node(Some("myGroupId"), Some(""), Some("1.2.3")));
    paths.push_child(path_node(None, Some("myArtifactId"), Some("1.2.3")));
    paths.push_child(path_node(Some("myGroupId"), None, Some("1.2.3")));
    paths.push_child(path_node(Some("myGroupId"), Some("myArtifactId"), None));
    ConfigNode::new("configuration").with_child(paths)
}
