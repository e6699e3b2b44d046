//! Merge rules: defaults applied beneath every file and environment source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use super::{PREFS_FILE, SETTINGS_DIR};
use crate::prefs::DEFAULT_SEPARATOR;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("merge.bundled_prefs", PREFS_FILE)?
        .set_default("merge.settings_dir", SETTINGS_DIR)?
        .set_default("merge.prefs_file", PREFS_FILE)?
        .set_default("merge.separator", DEFAULT_SEPARATOR)?
        .set_default("merge.atomic_write", true)
}
