//! ConfigLoader: the single entry point for building a validated configuration.

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file, local_file};
use super::PrefmergeConfig;
use crate::error::PrefsError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, `<base_dir>/prefmerge.toml`, then environment.
    pub fn load(base_dir: &Path) -> Result<PrefmergeConfig, PrefsError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, base_dir)?;
        Self::finish(environment::add_to_builder(builder))
    }

    /// Load defaults, exactly `path`, then environment.
    pub fn load_from_file(path: &Path) -> Result<PrefmergeConfig, PrefsError> {
        let builder = builder_with_defaults()?;
        let builder = local_file::add_required(builder, path)?;
        Self::finish(environment::add_to_builder(builder))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<PrefmergeConfig, PrefsError> {
        let config: PrefmergeConfig = builder.build()?.try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            PrefsError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        debug!(
            bundled_prefs = %config.merge.bundled_prefs.display(),
            separator = %config.merge.separator,
            "Configuration loaded"
        );
        Ok(config)
    }
}
