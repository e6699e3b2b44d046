//! Error types for the preference merge tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, merging, or persisting preferences.
///
/// A missing target prefs file and a declined confirmation are not errors;
/// they are modelled as `Ok(None)` from the loader and an aborted run outcome.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("{0}")]
    Usage(String),

    #[error("Not an Eclipse workspace directory.")]
    NotAWorkspace(PathBuf),

    #[error("Bundled preferences not found: {}", .0.display())]
    BundleNotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Separator must not be empty")]
    InvalidSeparator,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to get user input: {0}")]
    Prompt(String),
}

impl PrefsError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrefsError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for PrefsError {
    fn from(err: config::ConfigError) -> Self {
        PrefsError::Config(err.to_string())
    }
}
