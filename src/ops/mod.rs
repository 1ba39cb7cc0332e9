//! High-level operations.
//!
//! This module contains the implementation of doclink commands.

pub mod check;
pub mod resolve;
pub mod versions;

pub use check::check_config;
pub use resolve::{
    build_resolver, parse_batch, resolve_batch, resolver_with_versions, BatchEntry, BatchOptions,
};
pub use versions::{load_versions, manifest_path};
