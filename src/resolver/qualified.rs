//! Splitting dotted fully-qualified type names into [`TypeRef`]s.

use crate::core::type_ref::strip_generic_args;
use crate::core::{PackageMap, TypeRef};

/// Split `Package.Namespace.Type` using the packages known to `packages`.
///
/// Package identifiers may themselves contain dots, so every package that is
/// a prefix of the name (on a dot boundary) is a candidate. Longer prefixes
/// are tried first; the first candidate naming a member type wins, otherwise
/// the longest split is returned so callers can report what was looked up.
/// A trailing generic argument list is ignored.
pub fn split_qualified(packages: &PackageMap, full_name: &str) -> Option<TypeRef> {
    let full_name = strip_generic_args(full_name.trim());

    let mut candidates: Vec<TypeRef> = packages
        .packages()
        .filter_map(|package| {
            let rest = full_name.strip_prefix(package)?.strip_prefix('.')?;
            if rest.is_empty() {
                return None;
            }
            let (namespace, name) = rest.rsplit_once('.').unwrap_or(("", rest));
            Some(TypeRef::new(package, namespace, name))
        })
        .collect();

    candidates.sort_by_key(|r| std::cmp::Reverse(r.package.len()));

    let member = candidates
        .iter()
        .position(|r| packages.contains(&r.package, &r.namespace, &r.name));

    match member {
        Some(index) => Some(candidates.swap_remove(index)),
        None => candidates.into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packages() -> PackageMap {
        PackageMap::new()
            .with_types("System", "", ["Guid", "IProgress"])
            .with_types("System", "Threading.Tasks", ["Task"])
            .with_types("Jellyfin.Controller.MediaBrowser.Common.Plugins", "", ["BasePlugin"])
            .with_types("Jellyfin.Controller", "MediaBrowser.Common", ["Helper"])
    }

    #[test]
    fn test_split_root_namespace() {
        assert_eq!(
            split_qualified(&packages(), "System.Guid"),
            Some(TypeRef::new("System", "", "Guid"))
        );
    }

    #[test]
    fn test_split_nested_namespace() {
        assert_eq!(
            split_qualified(&packages(), "System.Threading.Tasks.Task"),
            Some(TypeRef::new("System", "Threading.Tasks", "Task"))
        );
    }

    #[test]
    fn test_longest_package_prefix() {
        assert_eq!(
            split_qualified(&packages(), "Jellyfin.Controller.MediaBrowser.Common.Plugins.BasePlugin"),
            Some(TypeRef::new(
                "Jellyfin.Controller.MediaBrowser.Common.Plugins",
                "",
                "BasePlugin"
            ))
        );
    }

    #[test]
    fn test_shorter_prefix_when_it_names_a_member() {
        let packages = packages().with_types("Jellyfin.Controller", "MediaBrowser.Common.Plugins", ["Other"]);
        assert_eq!(
            split_qualified(&packages, "Jellyfin.Controller.MediaBrowser.Common.Plugins.Other"),
            Some(TypeRef::new(
                "Jellyfin.Controller",
                "MediaBrowser.Common.Plugins",
                "Other"
            ))
        );
    }

    #[test]
    fn test_generic_arguments_stripped() {
        assert_eq!(
            split_qualified(&packages(), "System.IProgress<System.Double>"),
            Some(TypeRef::new("System", "", "IProgress"))
        );
    }

    #[test]
    fn test_prefix_must_end_on_dot_boundary() {
        assert_eq!(split_qualified(&packages(), "SystemX.Guid"), None);
        assert_eq!(split_qualified(&packages(), "System"), None);
        assert_eq!(split_qualified(&packages(), "Unknown.Type"), None);
    }

    #[test]
    fn test_unknown_type_returns_longest_split() {
        assert_eq!(
            split_qualified(&packages(), "System.Threading.Timer"),
            Some(TypeRef::new("System", "Threading", "Timer"))
        );
    }
}
