//! Local config file source: `prefmerge.toml` in the directory the tool runs from.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

/// File name looked up in the base directory.
pub const LOCAL_CONFIG_FILE: &str = "prefmerge.toml";

/// Add `<base_dir>/prefmerge.toml` to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    base_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = base_dir.join(LOCAL_CONFIG_FILE);
    if !path.is_file() {
        return Ok(builder);
    }
    debug!(config_path = %path.display(), "Using local configuration file");
    Ok(builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false)))
}

/// Add an explicitly requested config file. Missing files are an error.
pub fn add_required(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(true)))
}
