//! End-to-end tests for the match-then-extract pipeline.

use anyhow::Result;

use procpath::compiler::{extract_annotation_processors, is_compiler_plugin};
use procpath::constants::PROCESSOR_PACKAGING;
use procpath::models::{ArtifactCoordinate, Plugin, PluginConfiguration};
use procpath::test_utils::{
    RecordingResolver, ResolvedArtifact, compiler_plugin, init_test_logging,
    processor_paths_config,
};

/// A plausible project plugin list: the compiler plugin surrounded by others.
fn project_plugins() -> Vec<Plugin> {
    vec![
        Plugin::new("org.apache.maven.plugins", "maven-surefire-plugin", "3.2.5"),
        compiler_plugin().with_configuration(PluginConfiguration::Tree(processor_paths_config())),
        Plugin::new("org.apache.maven.plugins", "maven-jar-plugin", "3.4.1"),
    ]
}

/// Filter a plugin list down to the compiler plugin and extract its
/// processor path artifacts.
#[test]
fn test_match_then_extract_pipeline() -> Result<()> {
    init_test_logging(None);

    let plugins = project_plugins();
    let matched: Vec<&Plugin> = plugins
        .iter()
        .filter(|plugin| is_compiler_plugin(Some(plugin)).unwrap_or(false))
        .collect();
    assert_eq!(matched.len(), 1);

    let resolver = RecordingResolver::new();
    let artifacts = extract_annotation_processors(Some(&resolver), Some(matched[0]))?;

    assert_eq!(resolver.call_count(), 6);
    assert_eq!(artifacts.len(), 4);
    assert!(artifacts.contains(&ResolvedArtifact {
        coordinate: ArtifactCoordinate::new("myGroupId", "myArtifactId", "1.2.3"),
        packaging: PROCESSOR_PACKAGING.to_string(),
    }));
    Ok(())
}

/// A compiler plugin with no configuration block is common and yields an
/// empty artifact set rather than an error.
#[test]
fn test_pipeline_with_unconfigured_compiler_plugin() -> Result<()> {
    init_test_logging(None);

    let plugin = compiler_plugin();
    assert!(is_compiler_plugin(Some(&plugin))?);

    let resolver = RecordingResolver::new();
    let artifacts = extract_annotation_processors(Some(&resolver), Some(&plugin))?;
    assert!(artifacts.is_empty());
    assert_eq!(resolver.call_count(), 0);
    Ok(())
}

/// A project without the compiler plugin never reaches extraction.
#[test]
fn test_pipeline_without_compiler_plugin() {
    let plugins = vec![
        Plugin::new("org.apache.maven.plugins", "maven-surefire-plugin", "3.2.5"),
        Plugin::new("org.jacoco", "jacoco-maven-plugin", "0.8.12"),
    ];
    let matched = plugins
        .iter()
        .find(|plugin| is_compiler_plugin(Some(plugin)).unwrap_or(false));
    assert!(matched.is_none());
}
