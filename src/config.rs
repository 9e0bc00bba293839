//! Configuration System
//!
//! Layered configuration for the merge and tree commands. Values come from
//! built-in defaults, a global config file, workspace config files, and
//! GRAFT_* environment variables, in that precedence order.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraftConfig {
    /// Merge command settings
    #[serde(default)]
    pub merge: MergeConfig,

    /// Tree rendering settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the merge command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Root directory scanned for subdirectories to merge from
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Destination tree being populated
    #[serde(default = "default_target_root")]
    pub target_root: PathBuf,

    /// Name of the nested subfolder to merge from; also the prefix that
    /// selects eligible subdirectories of the source root
    #[serde(default = "default_subdir")]
    pub subdir: String,
}

fn default_source_root() -> PathBuf {
    PathBuf::from("unpacked")
}

fn default_target_root() -> PathBuf {
    PathBuf::from("collection")
}

fn default_subdir() -> String {
    "collection".to_string()
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            target_root: default_target_root(),
            subdir: default_subdir(),
        }
    }
}

/// Settings for the tree command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output file the tree listing is written to
    #[serde(default = "default_render_output")]
    pub output: PathBuf,
}

fn default_render_output() -> PathBuf {
    PathBuf::from("directory_structure.txt")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: default_render_output(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Merge(String),
    Render(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Merge(msg) => write!(f, "merge: {}", msg),
            ValidationError::Render(msg) => write!(f, "render: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MergeConfig {
    /// Validate merge settings
    pub fn validate(&self) -> Result<(), String> {
        if self.source_root.as_os_str().is_empty() {
            return Err("source_root cannot be empty".to_string());
        }
        if self.target_root.as_os_str().is_empty() {
            return Err("target_root cannot be empty".to_string());
        }
        if self.subdir.is_empty() {
            return Err("subdir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl RenderConfig {
    /// Validate render settings
    pub fn validate(&self) -> Result<(), String> {
        if self.output.as_os_str().is_empty() {
            return Err("output cannot be empty".to_string());
        }
        Ok(())
    }
}

impl GraftConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.merge.validate() {
            errors.push(ValidationError::Merge(e));
        }
        if let Err(e) = self.render.validate() {
            errors.push(ValidationError::Render(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
