//! Version extraction for a documentation build.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::{ProjectManifest, VersionSet};
use crate::util::diagnostic::suggestions;
use crate::util::Config;

/// The manifest path to read: the override if given, else the configured one.
pub fn manifest_path(config: &Config, manifest_override: Option<&Path>) -> Result<PathBuf> {
    manifest_override
        .map(Path::to_path_buf)
        .or_else(|| config.manifest.path.clone())
        .ok_or_else(|| anyhow!("no project manifest configured\n{}", suggestions::NO_MANIFEST))
}

/// Load the manifest and extract the versions the configuration asks for.
///
/// A missing or malformed manifest is an error; a manifest that simply does
/// not declare a version yields an absent field.
pub fn load_versions(config: &Config, manifest_override: Option<&Path>) -> Result<VersionSet> {
    let path = manifest_path(config, manifest_override)?;

    let manifest = ProjectManifest::load(&path)
        .with_context(|| format!("cannot extract versions from {}", path.display()))?;

    let runtime = config.runtime_query();
    let dependency = config.dependency_query();
    let versions = VersionSet::from_manifest(&manifest, Some(&runtime), dependency.as_ref());

    if versions.runtime.is_none() {
        tracing::warn!("no target framework found in {}", path.display());
    }
    if let (None, Some(dep)) = (&versions.dependency, &config.manifest.dependency) {
        tracing::warn!("no package reference `{}` found in {}", dep, path.display());
    }

    Ok(versions)
}
