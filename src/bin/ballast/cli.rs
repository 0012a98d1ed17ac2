//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use ballast::PathConvention;

/// Ballast - resolve native add-on build manifests
#[derive(Parser)]
#[command(name = "ballast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a manifest into a concrete build configuration
    Resolve(ResolveArgs),

    /// Check that a manifest parses and is well-formed
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Path to the manifest file
    pub manifest: PathBuf,

    /// Condition to select entries with (key=value, repeatable)
    #[arg(short, long = "cond", value_name = "KEY=VALUE")]
    pub conditions: Vec<String>,

    /// Directory against which manifest-relative paths resolve
    /// (defaults to the manifest's own directory)
    #[arg(long)]
    pub basedir: Option<PathBuf>,

    /// Path-separator convention for resolved paths (posix or win32)
    #[arg(long)]
    pub paths: Option<PathConvention>,

    /// Pretty-print the resolved configuration
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the manifest file
    pub manifest: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
