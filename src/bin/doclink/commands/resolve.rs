//! `doclink resolve` command

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, OutputFormat, ResolveArgs};
use doclink::ops::{build_resolver, parse_batch, resolve_batch, BatchOptions};
use doclink::util::diagnostic::suggestions;
use doclink::Resolver;

pub fn execute(global: &GlobalArgs, args: ResolveArgs) -> Result<()> {
    let (ctx, config) = super::load_config(global)?;
    let manifest = args.manifest.as_deref().map(|p| ctx.resolve_path(p));

    let resolver = build_resolver(&config, manifest.as_deref())?;

    if let Some(batch) = &args.batch {
        let input = read_batch_input(&ctx.resolve_path(batch), batch)?;
        let references = parse_batch(&input);
        let entries = resolve_batch(&resolver, &references, &BatchOptions { jobs: args.jobs })?;

        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Text => {
                for entry in &entries {
                    let urls: Vec<&str> = if args.first {
                        entry.urls.iter().take(1).map(String::as_str).collect()
                    } else {
                        entry.urls.iter().map(String::as_str).collect()
                    };
                    println!("{}\t{}", entry.reference, urls.join("\t"));
                }
            }
        }
        return Ok(());
    }

    let (reference, urls) = if let Some(name) = &args.qualified {
        (name.clone(), resolver.resolve_qualified(name))
    } else {
        single_reference(&resolver, &args)
    };

    if urls.is_empty() {
        tracing::warn!("no link available for `{}`", reference);
        tracing::info!("{}", suggestions::UNKNOWN_TYPE);
    }

    let urls: Vec<String> = if args.first {
        urls.into_iter().take(1).collect()
    } else {
        urls
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&urls)?),
        OutputFormat::Text => {
            for url in &urls {
                println!("{}", url);
            }
        }
    }

    Ok(())
}

/// Resolve the positional (package, namespace, type) triple.
fn single_reference(resolver: &Resolver, args: &ResolveArgs) -> (String, Vec<String>) {
    let package = args.package.as_deref().unwrap_or_default();
    let namespace = args.namespace.as_deref().unwrap_or_default();
    let type_name = args.type_name.as_deref().unwrap_or_default();

    let reference = [package, namespace, type_name]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".");

    (reference, resolver.resolve(package, namespace, type_name))
}

fn read_batch_input(path: &Path, as_given: &Path) -> Result<String> {
    if as_given == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read references from stdin")?;
        return Ok(input);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file: {}", path.display()))
}
