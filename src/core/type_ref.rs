//! Reference to an externally defined type.

use std::fmt;

use serde::Serialize;

/// A (package, namespace, type) triple as produced by the documentation
/// generator. The namespace is relative to the package and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeRef {
    pub package: String,
    pub namespace: String,
    pub name: String,
}

impl TypeRef {
    pub fn new(
        package: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        TypeRef {
            package: package.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// `Namespace.Name`, or just `Name` in the root namespace.
    pub fn namespaced_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

/// Join a namespace and a type name with a dot, skipping an empty namespace.
pub fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// Strip a generic argument list or arity suffix: `IProgress<T>` and
/// `` IProgress`1 `` both become `IProgress`.
pub fn strip_generic_args(name: &str) -> &str {
    let end = name.find(['<', '`']).unwrap_or(name.len());
    name[..end].trim_end()
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", qualify(&self.package, &self.namespaced_name()))
    }
}
