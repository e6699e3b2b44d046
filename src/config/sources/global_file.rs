//! Global config file source: $XDG_CONFIG_HOME/prefmerge/config.toml, falling
//! back to the platform config directory.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("prefmerge").join("config.toml"));
    }
    ProjectDirs::from("", "", "prefmerge").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(path) = global_config_path() else {
        return Ok(builder);
    };
    if !path.is_file() {
        debug!(config_path = %path.display(), "No global configuration file");
        return Ok(builder);
    }

    let canonical = dunce::canonicalize(&path).unwrap_or(path);
    debug!(config_path = %canonical.display(), "Using global configuration file");
    Ok(builder.add_source(File::new(&canonical.to_string_lossy(), FileFormat::Toml).required(false)))
}
