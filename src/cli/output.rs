//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PrefsError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &PrefsError) -> String {
    match e {
        PrefsError::BundleNotFound(_) => format!(
            "{}\nRun prefmerge from the directory holding the bundled preferences, or pass --bundle.",
            e
        ),
        other => other.to_string(),
    }
}
