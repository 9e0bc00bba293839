//! CLI parse: clap types for graft. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Graft CLI - directory tree merging and inspection
#[derive(Parser)]
#[command(name = "graft")]
#[command(about = "Directory tree merging and inspection utilities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config files are loaded from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

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

#[derive(Subcommand)]
pub enum Commands {
    /// Merge matching nested source trees into the target tree
    Merge {
        /// Source root scanned for matching subdirectories
        #[arg(long)]
        source: Option<PathBuf>,

        /// Target root to populate
        #[arg(long)]
        target: Option<PathBuf>,

        /// Nested subfolder name; also the prefix selecting source subdirectories
        #[arg(long)]
        subdir: Option<String>,

        /// Report what would be copied without writing
        #[arg(long)]
        dry_run: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write an indented listing of a directory tree to a file
    Tree {
        /// Starting directory (default: current directory)
        path: Option<PathBuf>,

        /// Output file for the listing
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format for the summary (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
