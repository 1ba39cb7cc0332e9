//! doclink CLI - version-aware external type links for API documentation

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use doclink::util::diagnostic::render_manifest_error;
use doclink::ManifestError;

fn main() {
    let cli = Cli::parse();
    let color = !cli.global.no_color;

    if let Err(e) = run(cli) {
        match e.downcast::<ManifestError>() {
            Ok(manifest_err) => eprint!("{}", render_manifest_error(manifest_err, color)),
            Err(e) => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.global.verbose {
        EnvFilter::new("doclink=debug")
    } else {
        EnvFilter::new("doclink=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.global.no_color)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Versions(args) => commands::versions::execute(&cli.global, args),
        Commands::Resolve(args) => commands::resolve::execute(&cli.global, args),
        Commands::Check(args) => commands::check::execute(&cli.global, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
