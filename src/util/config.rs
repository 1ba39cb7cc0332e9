//! Configuration file support for doclink.
//!
//! Configuration is layered, lowest to highest precedence:
//! - Built-in defaults (the link tables shipped with doclink)
//! - Global: `~/.doclink/config.toml`
//! - Project: `doclink.toml` in the working directory
//! - Explicit: `--config <file>` (or `DOCLINK_CONFIG`)
//!
//! A higher layer replaces whole `[packages.<id>]` entries, merges `[rename]`
//! entries by key, and overrides the `[manifest]` fields it sets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::manifest::{DEFAULT_FRAMEWORK_TAG, DEFAULT_RUNTIME_PREFIX};
use crate::core::{LinkTemplate, LinkTemplateTable, PackageLinks, PackageMap, RenameTable, VersionQuery};
use crate::resolver::ResolverConfig;

/// Built-in configuration source.
pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Name of the project configuration file.
pub const PROJECT_CONFIG_NAME: &str = "doclink.toml";

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// doclink configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the manifest is and which versions to read from it
    pub manifest: ManifestConfig,

    /// Local type name to external identifier
    pub rename: BTreeMap<String, String>,

    /// Link configuration per external package
    pub packages: BTreeMap<String, PackageConfig>,
}

/// `[manifest]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Path to the project manifest. Relative paths in a config file are
    /// resolved against the file's directory when it is loaded.
    pub path: Option<PathBuf>,

    /// Tag token of the target-framework property (default `TargetFramework`)
    pub framework_tag: Option<String>,

    /// Prefix preceding the runtime version (default `net`)
    pub runtime_prefix: Option<String>,

    /// `Include` of the package reference whose version is the dependency version
    pub dependency: Option<String>,
}

/// `[packages.<id>]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Substitute `Namespace.Name` for `%s`
    pub qualify: bool,

    /// URL templates, direct link first
    pub links: Vec<LinkTemplate>,

    /// Namespace (empty for the root namespace) to member type names
    pub namespaces: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::parse(&contents, path)?;

        if let (Some(manifest), Some(dir)) = (config.manifest.path.as_ref(), path.parent()) {
            if manifest.is_relative() {
                config.manifest.path = Some(dir.join(manifest));
            }
        }

        tracing::debug!("loaded config {}", path.display());
        Ok(config)
    }

    /// Parse configuration content. `path` is used for errors only.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configuration shipped with doclink.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG, Path::new("<built-in>"))
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.manifest.path.is_some() {
            self.manifest.path = other.manifest.path;
        }
        if other.manifest.framework_tag.is_some() {
            self.manifest.framework_tag = other.manifest.framework_tag;
        }
        if other.manifest.runtime_prefix.is_some() {
            self.manifest.runtime_prefix = other.manifest.runtime_prefix;
        }
        if other.manifest.dependency.is_some() {
            self.manifest.dependency = other.manifest.dependency;
        }

        self.rename.extend(other.rename);
        self.packages.extend(other.packages);
    }

    /// Query for the runtime version.
    pub fn runtime_query(&self) -> VersionQuery {
        VersionQuery::TargetFramework {
            tag_token: self
                .manifest
                .framework_tag
                .clone()
                .unwrap_or_else(|| DEFAULT_FRAMEWORK_TAG.to_string()),
            runtime_prefix: self
                .manifest
                .runtime_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_RUNTIME_PREFIX.to_string()),
        }
    }

    /// Query for the dependency version, if a dependency is configured.
    pub fn dependency_query(&self) -> Option<VersionQuery> {
        self.manifest
            .dependency
            .as_ref()
            .map(VersionQuery::package_reference)
    }

    /// Build the typed resolver tables.
    pub fn resolver_config(&self) -> ResolverConfig {
        let mut packages = PackageMap::new();
        let mut links = LinkTemplateTable::new();

        for (id, package) in &self.packages {
            for (namespace, types) in &package.namespaces {
                packages.insert(id.as_str(), namespace.as_str(), types.iter().map(String::as_str));
            }
            links.insert(
                id.as_str(),
                PackageLinks {
                    templates: package.links.clone(),
                    qualify: package.qualify,
                },
            );
        }

        let renames: RenameTable = self
            .rename
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();

        ResolverConfig::new(packages, links, renames)
    }
}

/// Where configuration layers are read from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Start from the built-in tables
    pub builtin: bool,

    /// Global config, read if it exists
    pub global: Option<PathBuf>,

    /// Project config, read if it exists
    pub project: Option<PathBuf>,

    /// Explicit config, must exist
    pub explicit: Option<PathBuf>,
}

/// Load merged configuration from all layers.
///
/// Order of precedence (highest to lowest):
/// 1. Explicit config
/// 2. Project config (doclink.toml)
/// 3. Global config (~/.doclink/config.toml)
/// 4. Built-in defaults
pub fn load_config(sources: &ConfigSources) -> Result<Config, ConfigError> {
    let mut config = if sources.builtin {
        Config::builtin()?
    } else {
        Config::default()
    };

    for path in [&sources.global, &sources.project].into_iter().flatten() {
        if path.exists() {
            config.merge(Config::load(path)?);
        }
    }

    if let Some(path) = &sources.explicit {
        config.merge(Config::load(path)?);
    }

    Ok(config)
}

/// Get the global doclink config directory (~/.doclink).
fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".doclink"))
}

/// Get the global config path (~/.doclink/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (doclink.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_NAME)
}
