//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// doclink - Version-aware external type links for API documentation
#[derive(Parser)]
#[command(name = "doclink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file layered over doclink.toml
    #[arg(long, global = true, env = "DOCLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not start from the built-in link tables
    #[arg(long, global = true)]
    pub no_defaults: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the versions extracted from the project manifest
    Versions(VersionsArgs),

    /// Resolve external type references to documentation links
    Resolve(ResolveArgs),

    /// Check the link configuration for problems
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for machine consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct VersionsArgs {
    /// Project manifest (overrides `[manifest].path`)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Package identifier
    #[arg(
        requires_all = ["namespace", "type_name"],
        required_unless_present_any = ["qualified", "batch"]
    )]
    pub package: Option<String>,

    /// Namespace within the package ("" for the root namespace)
    pub namespace: Option<String>,

    /// Type name
    pub type_name: Option<String>,

    /// Resolve a dotted fully-qualified name, e.g. System.Threading.Tasks.Task
    #[arg(long, conflicts_with_all = ["package", "batch"])]
    pub qualified: Option<String>,

    /// Resolve every dotted name in a file, one per line (`-` for stdin)
    #[arg(long, conflicts_with = "package")]
    pub batch: Option<PathBuf>,

    /// Print only the primary link
    #[arg(long)]
    pub first: bool,

    /// Number of parallel jobs for --batch
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Project manifest (overrides `[manifest].path`)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Also check templates against the versions in the manifest
    #[arg(long)]
    pub with_manifest: bool,

    /// Project manifest (overrides `[manifest].path`)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
