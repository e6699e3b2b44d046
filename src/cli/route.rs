//! CLI route: run context and the merge driver.
//!
//! Flow: locate workspace, load target (may be absent), load bundle, report
//! real conflicts, confirm, merge, persist.

use crate::cli::presentation::{format_conflicts, format_report_json, format_report_text};
use crate::cli::prompt::ConfirmPrompt;
use crate::config::PrefmergeConfig;
use crate::error::PrefsError;
use crate::merge::{find_conflicts, merge, summarize, Conflict, MergeSummary};
use crate::prefs::PropertyStore;
use crate::workspace::EclipseWorkspace;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Question asked when the merge would overwrite existing values.
pub const CONFIRM_QUESTION: &str = "This is your only warning.  Do you want to continue";

/// Per-invocation switches taken from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Overrides `merge.bundled_prefs`
    pub bundle: Option<PathBuf>,
    pub dry_run: bool,
    /// text or json
    pub format: String,
    /// Style the transcript with ANSI colors
    pub color: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            bundle: None,
            dry_run: false,
            format: "text".to_string(),
            color: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Saved,
    DryRun,
    Aborted,
}

/// Outcome of one run, rendered as the final status output.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub status: RunStatus,
    pub workspace: PathBuf,
    pub prefs_path: PathBuf,
    pub target_existed: bool,
    pub conflicts: Vec<Conflict>,
    pub summary: MergeSummary,
    pub follow_up_files: Vec<String>,
}

/// Runtime context for CLI execution: workspace, resolved bundle path, and config.
pub struct RunContext {
    config: PrefmergeConfig,
    workspace_root: PathBuf,
    bundle_path: PathBuf,
    options: RunOptions,
}

impl RunContext {
    pub fn new(
        workspace_root: PathBuf,
        config: PrefmergeConfig,
        options: RunOptions,
    ) -> Result<Self, PrefsError> {
        if options.format != "text" && options.format != "json" {
            return Err(PrefsError::Usage(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                options.format
            )));
        }
        let bundle_path = options
            .bundle
            .clone()
            .unwrap_or_else(|| config.merge.bundled_prefs.clone());

        Ok(Self {
            config,
            workspace_root,
            bundle_path,
            options,
        })
    }

    /// Run the merge and render the final status for stdout.
    pub fn execute(
        &self,
        out: &mut dyn Write,
        prompt: &mut dyn ConfirmPrompt,
    ) -> Result<String, PrefsError> {
        let report = self.run(out, prompt)?;
        if self.options.format == "json" {
            format_report_json(&report)
        } else {
            Ok(format_report_text(&report, self.options.color))
        }
    }

    /// Run the merge. Transcript lines (text format only) go to `out`.
    pub fn run(
        &self,
        out: &mut dyn Write,
        prompt: &mut dyn ConfirmPrompt,
    ) -> Result<RunReport, PrefsError> {
        let settings = &self.config.merge;
        let transcript = self.options.format == "text";

        let workspace = EclipseWorkspace::locate(&self.workspace_root, settings)?;
        info!(workspace = %workspace.root().display(), "Found workspace");
        if transcript {
            emit(out, &format!("Found workspace: {}\n", workspace.root().display()))?;
        }

        let target = PropertyStore::load(workspace.prefs_path(), &settings.separator)?;
        let source = PropertyStore::load(&self.bundle_path, &settings.separator)?
            .ok_or_else(|| PrefsError::BundleNotFound(self.bundle_path.clone()))?;

        let conflicts = target
            .as_ref()
            .map(|t| find_conflicts(t, &source))
            .unwrap_or_default();
        let summary = summarize(target.as_ref(), &source);
        info!(
            target_existed = target.is_some(),
            added = summary.added.len(),
            changed = summary.changed.len(),
            unchanged = summary.unchanged.len(),
            "Computed merge plan"
        );

        let mut report = RunReport {
            status: RunStatus::Saved,
            workspace: workspace.root().to_path_buf(),
            prefs_path: workspace.prefs_path().to_path_buf(),
            target_existed: target.is_some(),
            conflicts,
            summary,
            follow_up_files: settings.follow_up_files.clone(),
        };

        if !report.conflicts.is_empty() {
            if transcript {
                emit(out, &format_conflicts(&report.conflicts, self.options.color))?;
            }
            if !self.options.dry_run && !prompt.confirm(CONFIRM_QUESTION)? {
                info!("Merge declined by user");
                report.status = RunStatus::Aborted;
                return Ok(report);
            }
        }

        if self.options.dry_run {
            report.status = RunStatus::DryRun;
            return Ok(report);
        }

        let merged = merge(target, source);
        if settings.atomic_write {
            merged.save_atomic(workspace.prefs_path())?;
        } else {
            merged.save(workspace.prefs_path())?;
        }
        info!(path = %workspace.prefs_path().display(), keys = merged.len(), "Preferences saved");

        Ok(report)
    }
}

fn emit(out: &mut dyn Write, text: &str) -> Result<(), PrefsError> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| {
            warn!(error = %e, "Failed to write transcript");
            PrefsError::io("<stdout>", e)
        })
}
