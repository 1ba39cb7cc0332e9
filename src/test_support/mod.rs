//! Test utilities for doclink unit tests.
//!
//! Provides sample manifests, a small resolver configuration, and helpers to
//! lay out a documentation project on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use doclink::test_support::{fixtures, DocsProject};
//!
//! #[test]
//! fn test_example() {
//!     let project = DocsProject::new().with_manifest(fixtures::PLUGIN_CSPROJ);
//!     let versions = load_versions(&project.config(), None).unwrap();
//! }
//! ```

pub mod fixtures;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::util::Config;

// Re-export fixtures for convenience
pub use fixtures::*;

/// A temporary documentation project with a manifest and optional config.
pub struct DocsProject {
    dir: TempDir,
    manifest: Option<PathBuf>,
}

impl DocsProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        DocsProject {
            dir: TempDir::new().expect("failed to create temp dir"),
            manifest: None,
        }
    }

    /// Write `Plugin.csproj` with the given content.
    pub fn with_manifest(mut self, content: &str) -> Self {
        let path = self.dir.path().join("Plugin.csproj");
        std::fs::write(&path, content).expect("failed to write manifest");
        self.manifest = Some(path);
        self
    }

    /// Write `doclink.toml` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.dir.path().join("doclink.toml"), content)
            .expect("failed to write config");
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    /// Built-in configuration pointed at this project's manifest.
    pub fn config(&self) -> Config {
        let mut config = Config::builtin().expect("built-in config must parse");
        config.manifest.path = self.manifest.clone();
        config
    }
}

impl Default for DocsProject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::load_versions;

    #[test]
    fn test_docs_project_versions() {
        let project = DocsProject::new().with_manifest(fixtures::PLUGIN_CSPROJ);
        let versions = load_versions(&project.config(), None).unwrap();
        assert_eq!(versions, fixtures::versions());
    }

    #[test]
    fn test_docs_project_with_config() {
        let project = DocsProject::new().with_config("[rename]\nFoo = \"Foo-1\"\n");
        assert!(project.root().join("doclink.toml").exists());
        assert!(project.manifest_path().is_none());
    }
}
