//! CLI parse: clap types for prefmerge. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Merge bundled Eclipse workbench preferences into a workspace
#[derive(Parser, Debug)]
#[command(name = "prefmerge", version)]
#[command(about = "Merge bundled Eclipse workbench preferences into a workspace")]
pub struct Cli {
    /// Eclipse workspace location
    pub workspace: PathBuf,

    /// Bundled preferences file (overrides configuration)
    #[arg(long)]
    pub bundle: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overwrite conflicting values without asking
    #[arg(long, short = 'y')]
    pub force: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Summary format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
