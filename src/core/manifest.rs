//! MSBuild project manifest (`.csproj`) reading.
//!
//! Only two shapes are read from the manifest: the properties declared under
//! `<PropertyGroup>` elements and the `<PackageReference>` items. Everything
//! else in the document is ignored. Elements are matched by local name, so
//! legacy manifests that carry the MSBuild XML namespace parse the same way
//! as SDK-style ones.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Default tag token identifying a target-framework declaration.
pub const DEFAULT_FRAMEWORK_TAG: &str = "TargetFramework";

/// Default runtime-name prefix stripped from a target-framework moniker.
pub const DEFAULT_RUNTIME_PREFIX: &str = "net";

/// Error while loading a project manifest.
///
/// Both variants are fatal for a documentation build: every link depends on
/// the versions read from the manifest.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to read manifest `{}`", path.display())]
    #[diagnostic(
        code(doclink::manifest::io),
        help("Check `[manifest].path` in doclink.toml or pass `--manifest <path>`")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest `{}`: {message}", path.display())]
    #[diagnostic(
        code(doclink::manifest::malformed),
        help("The manifest must be well-formed XML")
    )]
    Malformed {
        path: PathBuf,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: SourceSpan,
    },
}

/// Which version to pull out of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionQuery {
    /// Version suffix of the target-framework moniker, e.g. `6.0` from `net6.0`.
    TargetFramework {
        /// Substring a property tag must contain (`TargetFramework` also
        /// matches `TargetFrameworks`).
        tag_token: String,
        /// Literal prefix the version follows.
        runtime_prefix: String,
    },

    /// `Version` of the package reference whose `Include` equals `include`.
    PackageReference { include: String },
}

impl VersionQuery {
    /// Target-framework query with the default tag token and prefix.
    pub fn target_framework() -> Self {
        VersionQuery::TargetFramework {
            tag_token: DEFAULT_FRAMEWORK_TAG.to_string(),
            runtime_prefix: DEFAULT_RUNTIME_PREFIX.to_string(),
        }
    }

    /// Package reference query for the given `Include` value.
    pub fn package_reference(include: impl Into<String>) -> Self {
        VersionQuery::PackageReference {
            include: include.into(),
        }
    }
}

/// A single property declared inside a `<PropertyGroup>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// A `<PropertyGroup>` and its properties, in document order.
#[derive(Debug, Clone, Default)]
pub struct PropertyGroup {
    pub properties: Vec<Property>,
}

/// A `<PackageReference>` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub include: Option<String>,
    pub version: Option<String>,
}

/// The parts of a project manifest this crate reads.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    /// Path the manifest was loaded from
    pub path: PathBuf,

    /// Property groups in document order
    pub property_groups: Vec<PropertyGroup>,

    /// Package references in document order
    pub package_references: Vec<PackageReference>,
}

impl ProjectManifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content. `path` is used for diagnostics only.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let doc = roxmltree::Document::parse(content).map_err(|e| {
            let pos = e.pos();
            let offset = byte_offset(content, pos.row, pos.col);
            let len = if offset < content.len() { 1 } else { 0 };
            ManifestError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
                src: NamedSource::new(path.display().to_string(), content.to_string()),
                span: (offset, len).into(),
            }
        })?;

        let mut property_groups = Vec::new();
        let mut package_references = Vec::new();

        for node in doc.descendants().filter(|n| n.is_element()) {
            match node.tag_name().name() {
                "PropertyGroup" => {
                    let properties = node
                        .children()
                        .filter(|c| c.is_element())
                        .map(|c| Property {
                            name: c.tag_name().name().to_string(),
                            value: c.text().unwrap_or_default().trim().to_string(),
                        })
                        .collect();
                    property_groups.push(PropertyGroup { properties });
                }
                "PackageReference" => {
                    // MSBuild also accepts the version as a child element
                    let version = attribute(&node, "Version").or_else(|| {
                        node.children()
                            .find(|c| c.is_element() && c.tag_name().name() == "Version")
                            .and_then(|c| c.text())
                            .map(|t| t.trim().to_string())
                    });
                    package_references.push(PackageReference {
                        include: attribute(&node, "Include"),
                        version,
                    });
                }
                _ => {}
            }
        }

        tracing::debug!(
            "manifest {}: {} property group(s), {} package reference(s)",
            path.display(),
            property_groups.len(),
            package_references.len()
        );

        Ok(ProjectManifest {
            path: path.to_path_buf(),
            property_groups,
            package_references,
        })
    }

    /// Extract a version. `None` means the manifest does not declare it.
    pub fn extract(&self, query: &VersionQuery) -> Option<String> {
        match query {
            VersionQuery::TargetFramework {
                tag_token,
                runtime_prefix,
            } => self.target_framework_version(tag_token, runtime_prefix),
            VersionQuery::PackageReference { include } => self.package_version(include),
        }
    }

    /// Raw value of the first property whose tag contains `tag_token`.
    pub fn target_framework(&self, tag_token: &str) -> Option<&str> {
        // Searches past the first group: SDK projects often open with a
        // group that has no framework (e.g. only `<Nullable>`), and the first
        // declaration in document order still wins.
        self.property_groups
            .iter()
            .flat_map(|g| g.properties.iter())
            .find(|p| p.name.contains(tag_token))
            .map(|p| p.value.as_str())
    }

    fn target_framework_version(&self, tag_token: &str, runtime_prefix: &str) -> Option<String> {
        let moniker = self.target_framework(tag_token)?;

        // `net6.0;net7.0` multi-targeting: the first framework is used
        let first = moniker.split(';').map(str::trim).find(|s| !s.is_empty())?;

        match first.split_once(runtime_prefix) {
            Some((_, version)) if !version.is_empty() => Some(version.to_string()),
            _ => {
                tracing::warn!(
                    "target framework `{}` in {} does not contain runtime prefix `{}`",
                    first,
                    self.path.display(),
                    runtime_prefix
                );
                None
            }
        }
    }

    fn package_version(&self, include: &str) -> Option<String> {
        self.package_references
            .iter()
            .find(|r| r.include.as_deref() == Some(include))
            .and_then(|r| r.version.clone())
    }
}

/// Load a manifest and extract one version from it.
pub fn extract_version(path: &Path, query: &VersionQuery) -> Result<Option<String>, ManifestError> {
    Ok(ProjectManifest::load(path)?.extract(query))
}

/// Attribute lookup by name, ignoring ASCII case (MSBuild attributes are
/// case-insensitive).
fn attribute(node: &roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.attributes()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .map(|a| a.value().to_string())
}

/// Convert a 1-based row/column (in characters) into a byte offset.
fn byte_offset(content: &str, row: u32, col: u32) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(row.saturating_sub(1) as usize)
        .map(str::len)
        .sum();
    let line = &content[line_start.min(content.len())..];
    let col_offset = line
        .char_indices()
        .nth(col.saturating_sub(1) as usize)
        .map(|(i, _)| i)
        .unwrap_or(line.len());

    (line_start + col_offset).min(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures;
    use tempfile::TempDir;

    fn parse(content: &str) -> ProjectManifest {
        ProjectManifest::parse(content, Path::new("Test.csproj")).unwrap()
    }

    #[test]
    fn test_target_framework_version() {
        let manifest = parse(fixtures::PLUGIN_CSPROJ);
        assert_eq!(
            manifest.extract(&VersionQuery::target_framework()),
            Some("6.0".to_string())
        );
    }

    #[test]
    fn test_no_property_group_is_absent() {
        let manifest = parse(
            r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Include="A" Version="1.0" />
  </ItemGroup>
</Project>"#,
        );
        assert!(manifest.property_groups.is_empty());
        assert_eq!(manifest.extract(&VersionQuery::target_framework()), None);
    }

    #[test]
    fn test_property_group_without_framework_is_absent() {
        let manifest = parse(
            r#"<Project>
  <PropertyGroup>
    <RootNamespace>MyApp</RootNamespace>
  </PropertyGroup>
</Project>"#,
        );
        assert_eq!(manifest.extract(&VersionQuery::target_framework()), None);
    }

    #[test]
    fn test_framework_after_group_without_one() {
        let manifest = parse(
            r#"<Project>
  <PropertyGroup>
    <Nullable>enable</Nullable>
  </PropertyGroup>
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
</Project>"#,
        );
        assert_eq!(
            manifest.extract(&VersionQuery::target_framework()),
            Some("8.0".to_string())
        );
    }

    #[test]
    fn test_first_framework_declaration_wins() {
        let manifest = parse(
            r#"<Project>
  <PropertyGroup>
    <TargetFramework>net6.0</TargetFramework>
  </PropertyGroup>
  <PropertyGroup>
    <TargetFramework>net7.0</TargetFramework>
  </PropertyGroup>
</Project>"#,
        );
        assert_eq!(
            manifest.extract(&VersionQuery::target_framework()),
            Some("6.0".to_string())
        );
    }

    #[test]
    fn test_multi_targeting_uses_first_framework() {
        let manifest = parse(
            r#"<Project>
  <PropertyGroup>
    <TargetFrameworks> net7.0;net6.0 </TargetFrameworks>
  </PropertyGroup>
</Project>"#,
        );
        assert_eq!(
            manifest.extract(&VersionQuery::target_framework()),
            Some("7.0".to_string())
        );
    }

    #[test]
    fn test_custom_prefix() {
        let manifest = parse(
            r#"<Project>
  <PropertyGroup>
    <TargetFramework>netstandard2.1</TargetFramework>
  </PropertyGroup>
</Project>"#,
        );
        let query = VersionQuery::TargetFramework {
            tag_token: "TargetFramework".to_string(),
            runtime_prefix: "netstandard".to_string(),
        };
        assert_eq!(manifest.extract(&query), Some("2.1".to_string()));
    }

    #[test]
    fn test_framework_without_prefix_is_absent() {
        let manifest = parse(
            r#"<Project>
  <PropertyGroup>
    <TargetFramework>v4.8</TargetFramework>
  </PropertyGroup>
</Project>"#,
        );
        assert_eq!(manifest.extract(&VersionQuery::target_framework()), None);
    }

    #[test]
    fn test_package_reference_lookup() {
        let manifest = parse(
            r#"<Project>
  <ItemGroup>
    <PackageReference Include="A" Version="1.0" />
    <PackageReference Include="B" Version="2.0" />
    <PackageReference Include="C" Version="3.0" />
  </ItemGroup>
</Project>"#,
        );
        assert_eq!(
            manifest.extract(&VersionQuery::package_reference("B")),
            Some("2.0".to_string())
        );
        assert_eq!(manifest.extract(&VersionQuery::package_reference("Z")), None);
    }

    #[test]
    fn test_package_reference_is_case_sensitive() {
        let manifest = parse(fixtures::PLUGIN_CSPROJ);
        assert_eq!(
            manifest.extract(&VersionQuery::package_reference("Jellyfin.Controller")),
            Some("10.8.13".to_string())
        );
        assert_eq!(
            manifest.extract(&VersionQuery::package_reference("jellyfin.controller")),
            None
        );
    }

    #[test]
    fn test_first_package_reference_wins() {
        let manifest = parse(
            r#"<Project>
  <ItemGroup>
    <PackageReference Include="A" Version="1.0" />
  </ItemGroup>
  <ItemGroup>
    <PackageReference Include="A" Version="9.9" />
  </ItemGroup>
</Project>"#,
        );
        assert_eq!(
            manifest.extract(&VersionQuery::package_reference("A")),
            Some("1.0".to_string())
        );
    }

    #[test]
    fn test_package_reference_version_child_element() {
        let manifest = parse(
            r#"<Project>
  <ItemGroup>
    <PackageReference Include="A">
      <Version>4.2.0</Version>
    </PackageReference>
  </ItemGroup>
</Project>"#,
        );
        assert_eq!(
            manifest.extract(&VersionQuery::package_reference("A")),
            Some("4.2.0".to_string())
        );
    }

    #[test]
    fn test_legacy_namespaced_manifest() {
        let manifest = parse(fixtures::LEGACY_CSPROJ);
        assert_eq!(
            manifest.extract(&VersionQuery::TargetFramework {
                tag_token: "TargetFrameworkVersion".to_string(),
                runtime_prefix: "v".to_string(),
            }),
            Some("4.7.2".to_string())
        );
        assert_eq!(
            manifest.extract(&VersionQuery::package_reference("Newtonsoft.Json")),
            Some("13.0.3".to_string())
        );
    }

    #[test]
    fn test_malformed_manifest_is_error() {
        let result = ProjectManifest::parse(
            "<Project><PropertyGroup></Project>",
            Path::new("Broken.csproj"),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, ManifestError::Malformed { .. }));
        assert!(err.to_string().contains("Broken.csproj"));
    }

    #[test]
    fn test_missing_manifest_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Missing.csproj");

        let err = extract_version(&path, &VersionQuery::target_framework()).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
        assert!(err.to_string().contains("Missing.csproj"));
    }

    #[test]
    fn test_extract_version_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Plugin.csproj");
        std::fs::write(&path, fixtures::PLUGIN_CSPROJ).unwrap();

        let version = extract_version(&path, &VersionQuery::target_framework()).unwrap();
        assert_eq!(version, Some("6.0".to_string()));
    }

    #[test]
    fn test_byte_offset() {
        let content = "ab\ncde\nf";
        assert_eq!(byte_offset(content, 1, 1), 0);
        assert_eq!(byte_offset(content, 2, 2), 4);
        assert_eq!(byte_offset(content, 3, 1), 7);
        assert_eq!(byte_offset(content, 9, 9), content.len());
    }
}
