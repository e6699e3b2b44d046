//! Configuration System
//!
//! Layered configuration for the merge run: built-in defaults, a global
//! `config.toml`, an optional `prefmerge.toml` next to the bundled prefs, and
//! `PREFMERGE__SECTION__KEY` environment overrides.

use crate::logging::LoggingConfig;
use crate::prefs::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Workspace-relative directory holding Eclipse runtime preferences.
pub const SETTINGS_DIR: &str = ".metadata/.plugins/org.eclipse.core.runtime/.settings";

/// Workbench preferences file name, both bundled and in the workspace.
pub const PREFS_FILE: &str = "org.eclipse.ui.workbench.prefs";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefmergeConfig {
    /// Merge behaviour and file locations
    #[serde(default)]
    pub merge: MergeSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where preferences come from and go to, and how they are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSettings {
    /// Bundled preferences file (relative paths resolve against the CWD)
    #[serde(default = "default_bundled_prefs")]
    pub bundled_prefs: PathBuf,

    /// Settings directory relative to the workspace root
    #[serde(default = "default_settings_dir")]
    pub settings_dir: PathBuf,

    /// Target preferences file name inside the settings directory
    #[serde(default = "default_prefs_file")]
    pub prefs_file: String,

    /// Key/value separator
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Write through a temporary file and rename
    #[serde(default = "default_true")]
    pub atomic_write: bool,

    /// Files the user still has to import by hand after a successful merge
    #[serde(default = "default_follow_up_files")]
    pub follow_up_files: Vec<String>,
}

fn default_bundled_prefs() -> PathBuf {
    PathBuf::from(PREFS_FILE)
}

fn default_settings_dir() -> PathBuf {
    PathBuf::from(SETTINGS_DIR)
}

fn default_prefs_file() -> String {
    PREFS_FILE.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

fn default_follow_up_files() -> Vec<String> {
    vec![
        "thepeoplescoder.epf".to_string(),
        "thepeoplescoder-java-codeStyle-formatter.xml".to_string(),
    ]
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            bundled_prefs: default_bundled_prefs(),
            settings_dir: default_settings_dir(),
            prefs_file: default_prefs_file(),
            separator: default_separator(),
            atomic_write: default_true(),
            follow_up_files: default_follow_up_files(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Merge(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Merge(msg) => write!(f, "merge: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MergeSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.separator.is_empty() {
            return Err("separator cannot be empty".to_string());
        }
        if self.prefs_file.trim().is_empty() {
            return Err("prefs_file cannot be empty".to_string());
        }
        if self.bundled_prefs.as_os_str().is_empty() {
            return Err("bundled_prefs cannot be empty".to_string());
        }
        Ok(())
    }
}

impl PrefmergeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.merge.validate() {
            errors.push(ValidationError::Merge(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
