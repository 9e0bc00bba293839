//! CLI help and command-name contract for log context and routing.

use crate::cli::parse::Commands;

/// Command name string for log context (e.g. "merge", "tree").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Merge { .. } => "merge",
        Commands::Tree { .. } => "tree",
    }
}
