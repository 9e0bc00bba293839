//! Config loader facade: defaults, global file, workspace files, environment.

use super::{sources, GraftConfig};
use ::config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Loads configuration from all sources with fixed precedence.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    /// Precedence (lowest to highest): struct defaults, global file,
    /// workspace files, GRAFT_* environment variables.
    pub fn load(workspace_root: &Path) -> Result<GraftConfig, ConfigError> {
        let mut builder = Config::builder();
        builder = sources::global_file::add_to_builder(builder)?;
        builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        builder = builder.add_source(Environment::with_prefix("GRAFT").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Load configuration from an explicit file, bypassing the layered sources.
    pub fn load_from_file(path: &Path) -> Result<GraftConfig, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?
            .try_deserialize()
    }
}
