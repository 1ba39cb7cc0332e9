//! `doclink versions` command

use anyhow::Result;

use crate::cli::{GlobalArgs, OutputFormat, VersionsArgs};
use doclink::ops::load_versions;

pub fn execute(global: &GlobalArgs, args: VersionsArgs) -> Result<()> {
    let (ctx, config) = super::load_config(global)?;
    let manifest = args.manifest.as_deref().map(|p| ctx.resolve_path(p));

    let versions = load_versions(&config, manifest.as_deref())?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&versions)?),
        OutputFormat::Text => {
            println!("runtime: {}", versions.runtime.as_deref().unwrap_or("<absent>"));
            println!(
                "dependency: {}",
                versions.dependency.as_deref().unwrap_or("<absent>")
            );
        }
    }

    Ok(())
}
