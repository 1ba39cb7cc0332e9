//! Configuration lint for `doclink check`.
//!
//! Findings:
//! - error: a template needs `{dependency_version}` but no dependency is configured
//! - warning: a package has templates but no types, or types but no templates
//! - warning: a namespace lists no types
//! - warning: a rename entry names no member type
//! - note: a template will be skipped with the versions of the current manifest

use crate::core::{VersionField, VersionSet};
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::Config;

/// Lint the configuration. `versions` enables checks against the manifest.
pub fn check_config(config: &Config, versions: Option<&VersionSet>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let resolver_config = config.resolver_config();

    for (id, package) in &config.packages {
        if package.links.is_empty() && !package.namespaces.is_empty() {
            diagnostics.push(
                Diagnostic::warning(format!("package `{}` has types but no link templates", id))
                    .with_context("its types will never resolve to a link")
                    .with_suggestion(format!("Add `links` to `[packages.\"{}\"]`", id)),
            );
        }
        if !package.links.is_empty() && package.namespaces.is_empty() {
            diagnostics.push(
                Diagnostic::warning(format!("package `{}` has link templates but no types", id))
                    .with_suggestion(format!(
                        "Add `[packages.\"{}\".namespaces]` listing its types",
                        id
                    )),
            );
        }

        for (namespace, types) in &package.namespaces {
            if types.is_empty() {
                diagnostics.push(Diagnostic::warning(format!(
                    "namespace `{}` of package `{}` lists no types",
                    if namespace.is_empty() { "<root>" } else { namespace },
                    id
                )));
            }
        }

        for template in &package.links {
            let required = template.required_versions();

            if required.contains(&VersionField::Dependency) && config.manifest.dependency.is_none() {
                diagnostics.push(
                    Diagnostic::error(format!(
                        "link template of package `{}` can never expand",
                        id
                    ))
                    .with_context(format!("template: {}", template))
                    .with_context(format!("uses {}", VersionField::Dependency))
                    .with_suggestion(suggestions::NO_DEPENDENCY),
                );
                continue;
            }

            if let Some(versions) = versions.filter(|v| !template.is_satisfied_by(v)) {
                let missing: Vec<String> = required
                    .iter()
                    .filter(|f| versions.get(**f).is_none())
                    .map(|f| f.to_string())
                    .collect();
                diagnostics.push(
                    Diagnostic::note(format!("link template of package `{}` will be skipped", id))
                        .with_context(format!("template: {}", template))
                        .with_context(format!("manifest does not provide {}", missing.join(", "))),
                );
            }
        }
    }

    for (from, to) in &config.rename {
        if !resolver_config.packages.contains_type_name(from) {
            diagnostics.push(
                Diagnostic::warning(format!("rename `{}` -> `{}` is never used", from, to))
                    .with_context(format!("`{}` is not a member of any package", from)),
            );
        }
    }

    diagnostics.sort_by_key(|d| d.severity);
    diagnostics
}
