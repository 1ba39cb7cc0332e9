//! `doclink check` command

use anyhow::{bail, Result};

use crate::cli::{CheckArgs, GlobalArgs};
use doclink::ops::{check_config, load_versions};
use doclink::util::diagnostic::emit;

pub fn execute(global: &GlobalArgs, args: CheckArgs) -> Result<()> {
    let (ctx, config) = super::load_config(global)?;

    let versions = if args.with_manifest || args.manifest.is_some() {
        let manifest = args.manifest.as_deref().map(|p| ctx.resolve_path(p));
        Some(load_versions(&config, manifest.as_deref())?)
    } else {
        None
    };

    let diagnostics = check_config(&config, versions.as_ref());
    let color = !global.no_color;

    for diag in &diagnostics {
        emit(diag, color);
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        bail!("configuration has {} error(s)", errors);
    }

    println!(
        "{} package(s), {} rename(s): ok ({} finding(s))",
        config.packages.len(),
        config.rename.len(),
        diagnostics.len()
    );

    Ok(())
}
