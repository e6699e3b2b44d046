//! Eclipse workspace layout.
//!
//! A directory is an Eclipse workspace when it holds the runtime settings
//! directory; the workbench prefs file inside it is the merge target and may
//! not exist yet.

use crate::config::MergeSettings;
use crate::error::PrefsError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved locations inside one Eclipse workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EclipseWorkspace {
    root: PathBuf,
    settings_dir: PathBuf,
    prefs_path: PathBuf,
}

impl EclipseWorkspace {
    /// Validate `root` as a workspace and resolve the target prefs path.
    pub fn locate(root: &Path, settings: &MergeSettings) -> Result<Self, PrefsError> {
        let settings_dir = root.join(&settings.settings_dir);
        if !settings_dir.is_dir() {
            debug!(settings_dir = %settings_dir.display(), "Settings directory missing");
            return Err(PrefsError::NotAWorkspace(root.to_path_buf()));
        }

        let root = dunce::canonicalize(root).map_err(|e| PrefsError::io(root, e))?;
        let settings_dir = root.join(&settings.settings_dir);
        let prefs_path = settings_dir.join(&settings.prefs_file);

        Ok(Self {
            root,
            settings_dir,
            prefs_path,
        })
    }

    /// Canonical workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    /// Workbench prefs file to merge into.
    pub fn prefs_path(&self) -> &Path {
        &self.prefs_path
    }
}
