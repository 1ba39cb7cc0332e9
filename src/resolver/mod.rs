//! External reference resolution.
//!
//! The resolver is pure: all tables and versions are fixed when it is
//! constructed, and every lookup is an in-memory string operation.

pub mod qualified;
pub mod resolve;

pub use qualified::split_qualified;
pub use resolve::Resolver;

use crate::core::{LinkTemplateTable, PackageMap, RenameTable};

/// The static tables a [`Resolver`] consults.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Which types each package owns
    pub packages: PackageMap,

    /// Link templates per package
    pub links: LinkTemplateTable,

    /// Local type name to external identifier
    pub renames: RenameTable,
}

impl ResolverConfig {
    pub fn new(packages: PackageMap, links: LinkTemplateTable, renames: RenameTable) -> Self {
        ResolverConfig {
            packages,
            links,
            renames,
        }
    }
}
