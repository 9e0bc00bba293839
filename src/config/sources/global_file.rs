//! Global config file source: $XDG_CONFIG_HOME/graft/config.toml or ~/.config/graft/config.toml

use ::config::builder::DefaultState;
use ::config::ConfigBuilder;
use ::config::ConfigError;
use ::config::File;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global config file. Uses XDG_CONFIG_HOME when set,
/// otherwise ~/.config/graft/config.toml.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("graft").join("config.toml"));
        }
    }
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("graft")
            .join("config.toml")
    })
}

/// Add the global config file source to the builder when the file exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.exists() => {
            builder = builder.add_source(File::from(path).required(false));
        }
        Some(path) => {
            debug!(config_path = %path.display(), "no global configuration file");
        }
        None => {}
    }
    Ok(builder)
}
