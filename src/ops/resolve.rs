//! Link resolution operations.

use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::core::{TypeRef, VersionSet};
use crate::ops::versions::load_versions;
use crate::resolver::Resolver;
use crate::util::Config;

/// Build a resolver from the configuration and the project manifest.
pub fn build_resolver(config: &Config, manifest_override: Option<&Path>) -> Result<Resolver> {
    let versions = load_versions(config, manifest_override)?;
    Ok(resolver_with_versions(config, versions))
}

/// Build a resolver with versions supplied directly.
pub fn resolver_with_versions(config: &Config, versions: VersionSet) -> Resolver {
    Resolver::new(config.resolver_config(), versions)
}

/// Resolution result for one reference of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// The reference as given
    pub reference: String,

    /// How it was split, if it matched a known package
    pub type_ref: Option<TypeRef>,

    /// Candidate URLs, primary first
    pub urls: Vec<String>,
}

/// Options for batch resolution.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Number of worker threads (rayon default if `None`)
    pub jobs: Option<usize>,
}

/// Parse batch input: one dotted type name per line. Blank lines and lines
/// starting with `#` are ignored.
pub fn parse_batch(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Resolve many references in parallel. Output order matches input order.
pub fn resolve_batch(
    resolver: &Resolver,
    references: &[String],
    opts: &BatchOptions,
) -> Result<Vec<BatchEntry>> {
    let run = || -> Vec<BatchEntry> {
        references
            .par_iter()
            .map(|reference| {
                let type_ref = resolver.split_qualified(reference);
                let urls = type_ref
                    .as_ref()
                    .map(|r| resolver.resolve_ref(r))
                    .unwrap_or_default();
                BatchEntry {
                    reference: reference.clone(),
                    type_ref,
                    urls,
                }
            })
            .collect()
    };

    let entries = match opts.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to create worker pool")?
            .install(run),
        None => run(),
    };

    let unresolved = entries.iter().filter(|e| e.urls.is_empty()).count();
    tracing::info!(
        "Resolved {} of {} references",
        entries.len() - unresolved,
        entries.len()
    );

    Ok(entries)
}
