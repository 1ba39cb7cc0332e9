//! doclink - version-aware external type links for API documentation
//!
//! This crate reads the target runtime and dependency versions from an
//! MSBuild project manifest and resolves references to externally defined
//! types into links to their documentation or source.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

/// Test utilities for doclink unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides sample manifests and resolver configurations.
#[cfg(test)]
pub mod test_support;

pub use core::{
    extract_version, LinkTemplate, LinkTemplateTable, ManifestError, PackageMap, ProjectManifest,
    RenameTable, TypeRef, VersionQuery, VersionSet,
};

pub use resolver::{Resolver, ResolverConfig};
pub use util::context::GlobalContext;
