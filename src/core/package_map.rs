//! Which types belong to which external package.

use std::collections::{BTreeMap, BTreeSet};

/// Namespace (empty string for the root namespace) to member type names.
type Namespaces = BTreeMap<String, BTreeSet<String>>;

/// Static table of the (namespace, type) pairs each external package owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMap {
    packages: BTreeMap<String, Namespaces>,
}

impl PackageMap {
    /// Create an empty package map.
    pub fn new() -> Self {
        PackageMap::default()
    }

    /// Add types to a namespace of a package.
    pub fn insert<I, S>(&mut self, package: impl Into<String>, namespace: impl Into<String>, types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages
            .entry(package.into())
            .or_default()
            .entry(namespace.into())
            .or_default()
            .extend(types.into_iter().map(Into::into));
    }

    /// Builder form of [`PackageMap::insert`].
    pub fn with_types<I, S>(
        mut self,
        package: impl Into<String>,
        namespace: impl Into<String>,
        types: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(package, namespace, types);
        self
    }

    /// Whether `name` is a member of `namespace` in `package`.
    pub fn contains(&self, package: &str, namespace: &str, name: &str) -> bool {
        self.packages
            .get(package)
            .and_then(|namespaces| namespaces.get(namespace))
            .is_some_and(|types| types.contains(name))
    }

    /// Package identifiers in sorted order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Whether a type name is a member anywhere in the map.
    pub fn contains_type_name(&self, name: &str) -> bool {
        self.packages
            .values()
            .flat_map(|namespaces| namespaces.values())
            .any(|types| types.contains(name))
    }
}
