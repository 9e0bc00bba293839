//! CLI route: run context and dispatch to domain modules and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation;
use crate::config::{ConfigLoader, GraftConfig, MergeConfig};
use crate::error::GraftError;
use crate::merge;
use crate::tree::render;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: the loaded, validated configuration.
pub struct RunContext {
    config: GraftConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, GraftError> {
        let config = if let Some(ref path) = config_path {
            ConfigLoader::load_from_file(path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        if let Err(errors) = config.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(GraftError::Config(messages.join("; ")));
        }

        Ok(Self { config })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &GraftConfig {
        &self.config
    }

    /// Execute a parsed command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, GraftError> {
        info!(command = command_name(command), "executing command");

        match command {
            Commands::Merge {
                source,
                target,
                subdir,
                dry_run,
                format,
            } => {
                let merge_config = MergeConfig {
                    source_root: source
                        .clone()
                        .unwrap_or_else(|| self.config.merge.source_root.clone()),
                    target_root: target
                        .clone()
                        .unwrap_or_else(|| self.config.merge.target_root.clone()),
                    subdir: subdir
                        .clone()
                        .unwrap_or_else(|| self.config.merge.subdir.clone()),
                };

                let outcome = merge::run(&merge_config, *dry_run)?;
                Ok(match format.as_str() {
                    "json" => presentation::format_merge_json(&outcome, *dry_run),
                    _ => presentation::format_merge_text(&outcome, *dry_run),
                })
            }
            Commands::Tree {
                path,
                output,
                format,
            } => {
                let start = match path {
                    Some(p) => p.clone(),
                    None => std::env::current_dir()?,
                };
                let output = output
                    .clone()
                    .unwrap_or_else(|| self.config.render.output.clone());

                let report = render::write_report(&start, &output)?;
                Ok(match format.as_str() {
                    "json" => presentation::format_render_json(&report, &output),
                    _ => presentation::format_render_text(&report, &output),
                })
            }
        }
    }
}
