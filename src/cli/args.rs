//! CLI argument definitions using clap.
//!
//! Running `unstrung` with no command performs the analysis; the only
//! subcommand is `init`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

/// Arguments for the default analysis.
#[derive(Debug, Clone, Default, Args)]
pub struct AnalyzeArgs {
    /// Project root directory; the config file is searched from here
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Application directory, relative to the project root (overrides config file)
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .unstrungrc.json configuration file
    Init,
}
