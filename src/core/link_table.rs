//! Link templates per external package, plus the rename table.

use std::collections::BTreeMap;

use crate::core::template::LinkTemplate;

/// How links are built for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageLinks {
    /// Templates in priority order. The first is the direct link, the rest
    /// are fallbacks such as search pages.
    pub templates: Vec<LinkTemplate>,

    /// Substitute `Namespace.Name` instead of `Name` for `%s`.
    pub qualify: bool,
}

impl PackageLinks {
    pub fn new(templates: Vec<LinkTemplate>) -> Self {
        PackageLinks {
            templates,
            qualify: false,
        }
    }

    pub fn qualified(mut self) -> Self {
        self.qualify = true;
        self
    }
}

/// Ordered link templates for each package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTemplateTable {
    packages: BTreeMap<String, PackageLinks>,
}

impl LinkTemplateTable {
    pub fn new() -> Self {
        LinkTemplateTable::default()
    }

    /// Set the links of a package, replacing any previous entry.
    pub fn insert(&mut self, package: impl Into<String>, links: PackageLinks) {
        self.packages.insert(package.into(), links);
    }

    /// Builder form of [`LinkTemplateTable::insert`].
    pub fn with_links(mut self, package: impl Into<String>, links: PackageLinks) -> Self {
        self.insert(package, links);
        self
    }

    pub fn get(&self, package: &str) -> Option<&PackageLinks> {
        self.packages.get(package)
    }
}

/// Type names whose identifier in the external documentation differs from
/// the local name, e.g. `IProgress` -> `IProgress-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameTable {
    renames: BTreeMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        RenameTable::default()
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.renames.insert(from.into(), to.into());
    }

    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.insert(from, to);
        self
    }

    /// The external identifier for `name`.
    pub fn apply<'a>(&'a self, name: &'a str) -> &'a str {
        self.renames.get(name).map(String::as_str).unwrap_or(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenameTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        RenameTable {
            renames: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
