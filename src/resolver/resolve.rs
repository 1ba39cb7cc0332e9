//! The external reference resolver.

use crate::core::type_ref::qualify;
use crate::core::{TypeRef, VersionSet};
use crate::resolver::{split_qualified, ResolverConfig};

/// Resolves external type references to documentation URLs.
///
/// Holds only immutable data, so one instance can be shared across threads
/// and queried any number of times with identical results.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolverConfig,
    versions: VersionSet,
}

impl Resolver {
    /// Create a resolver from its tables and the versions of this build.
    pub fn new(config: ResolverConfig, versions: VersionSet) -> Self {
        Resolver { config, versions }
    }

    /// The versions substituted into templates.
    pub fn versions(&self) -> &VersionSet {
        &self.versions
    }

    /// Candidate URLs for a type, primary link first.
    ///
    /// Returns an empty list if the package is unknown, or the type is not a
    /// member of `namespace` in that package. Templates needing a version the
    /// manifest did not declare are skipped.
    pub fn resolve(&self, package: &str, namespace: &str, type_name: &str) -> Vec<String> {
        if !self.config.packages.contains(package, namespace, type_name) {
            return Vec::new();
        }

        let Some(links) = self.config.links.get(package) else {
            tracing::debug!("package `{}` has types but no link templates", package);
            return Vec::new();
        };

        let external_name = self.config.renames.apply(type_name);
        if external_name != type_name {
            tracing::debug!("renamed `{}` to `{}`", type_name, external_name);
        }

        let substituted = if links.qualify {
            qualify(namespace, external_name)
        } else {
            external_name.to_string()
        };

        links
            .templates
            .iter()
            .filter_map(|template| {
                let url = template.expand(&substituted, &self.versions);
                if url.is_none() {
                    tracing::debug!(
                        "skipping template `{}` for `{}`: required version not available",
                        template,
                        type_name
                    );
                }
                url
            })
            .collect()
    }

    /// Candidate URLs for a typed reference.
    pub fn resolve_ref(&self, type_ref: &TypeRef) -> Vec<String> {
        self.resolve(&type_ref.package, &type_ref.namespace, &type_ref.name)
    }

    /// The primary link for a type, if any.
    pub fn resolve_first(&self, package: &str, namespace: &str, type_name: &str) -> Option<String> {
        self.resolve(package, namespace, type_name).into_iter().next()
    }

    /// Split a dotted name against the known packages.
    pub fn split_qualified(&self, full_name: &str) -> Option<TypeRef> {
        split_qualified(&self.config.packages, full_name)
    }

    /// Candidate URLs for a dotted fully-qualified name such as
    /// `System.Threading.Tasks.Task`.
    pub fn resolve_qualified(&self, full_name: &str) -> Vec<String> {
        self.split_qualified(full_name)
            .map(|type_ref| self.resolve_ref(&type_ref))
            .unwrap_or_default()
    }
}
