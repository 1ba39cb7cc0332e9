//! Versions extracted from the project manifest.

use std::fmt;

use serde::Serialize;

use crate::core::manifest::{ProjectManifest, VersionQuery};

/// A version slot that link templates can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VersionField {
    /// Target runtime version (`{runtime_version}`)
    Runtime,
    /// Version of the configured dependency (`{dependency_version}`)
    Dependency,
}

impl VersionField {
    /// Placeholder name as written inside `{}` in a template.
    pub fn placeholder(&self) -> &'static str {
        match self {
            VersionField::Runtime => "runtime_version",
            VersionField::Dependency => "dependency_version",
        }
    }

    /// Parse a placeholder name.
    pub fn from_placeholder(name: &str) -> Option<Self> {
        match name {
            "runtime_version" => Some(VersionField::Runtime),
            "dependency_version" => Some(VersionField::Dependency),
            _ => None,
        }
    }
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.placeholder())
    }
}

/// Runtime and dependency versions for one documentation build.
///
/// Absent fields mean the manifest did not declare the version; templates
/// that need them are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionSet {
    pub runtime: Option<String>,
    pub dependency: Option<String>,
}

impl VersionSet {
    /// Create a version set from explicit values.
    pub fn new(runtime: Option<String>, dependency: Option<String>) -> Self {
        VersionSet {
            runtime,
            dependency,
        }
    }

    /// Run the configured queries against a loaded manifest.
    pub fn from_manifest(
        manifest: &ProjectManifest,
        runtime: Option<&VersionQuery>,
        dependency: Option<&VersionQuery>,
    ) -> Self {
        let set = VersionSet {
            runtime: runtime.and_then(|q| manifest.extract(q)),
            dependency: dependency.and_then(|q| manifest.extract(q)),
        };

        tracing::debug!(
            "versions from {}: runtime={:?} dependency={:?}",
            manifest.path.display(),
            set.runtime,
            set.dependency
        );

        set
    }

    /// Look up a field.
    pub fn get(&self, field: VersionField) -> Option<&str> {
        match field {
            VersionField::Runtime => self.runtime.as_deref(),
            VersionField::Dependency => self.dependency.as_deref(),
        }
    }
}
