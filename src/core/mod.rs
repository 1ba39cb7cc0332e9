//! Core data structures for doclink.
//!
//! This module contains the foundational types:
//! - Project manifest reading and version extraction
//! - Package maps, link templates and the rename table
//! - Type references

pub mod link_table;
pub mod manifest;
pub mod package_map;
pub mod template;
pub mod type_ref;
pub mod version_set;

pub use link_table::{LinkTemplateTable, PackageLinks, RenameTable};
pub use manifest::{extract_version, ManifestError, ProjectManifest, VersionQuery};
pub use package_map::PackageMap;
pub use template::{LinkTemplate, TemplateError};
pub use type_ref::TypeRef;
pub use version_set::{VersionField, VersionSet};
