//! Global context for doclink operations.
//!
//! Provides centralized access to the working directory and configuration
//! locations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{self, load_config, Config, ConfigSources};

/// Global context shared by all commands.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    cwd: PathBuf,
    global_config: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a context rooted at the current working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a context rooted at `cwd`.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        GlobalContext {
            cwd: cwd.into(),
            global_config: config::global_config_path(),
        }
    }

    /// Override (or disable) the global config location.
    pub fn with_global_config(mut self, path: Option<PathBuf>) -> Self {
        self.global_config = path;
        self
    }

    /// Path to the project config (`doclink.toml` in the working directory).
    pub fn project_config_path(&self) -> PathBuf {
        config::project_config_path(&self.cwd)
    }

    /// Resolve a path given on the command line against the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the layered configuration.
    pub fn load_config(&self, explicit: Option<&Path>, builtin: bool) -> Result<Config> {
        let sources = ConfigSources {
            builtin,
            global: self.global_config.clone(),
            project: Some(self.project_config_path()),
            explicit: explicit.map(|p| self.resolve_path(p)),
        };

        let mut config = load_config(&sources).context("failed to load configuration")?;

        // Built-in manifest paths are relative to the working directory
        if let Some(path) = config.manifest.path.take() {
            config.manifest.path = Some(self.resolve_path(&path));
        }

        Ok(config)
    }
}
