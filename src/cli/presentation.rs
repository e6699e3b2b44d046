//! CLI presentation: transcript and final status formatting.

use crate::cli::route::{RunReport, RunStatus};
use crate::error::PrefsError;
use crate::merge::Conflict;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// One block per conflict followed by the conflict count.
pub fn format_conflicts(conflicts: &[Conflict], color: bool) -> String {
    let mut out = String::new();
    for conflict in conflicts {
        let key = format!("\"{}\"", conflict.key);
        let key = if color {
            key.bold().to_string()
        } else {
            key
        };
        out.push_str(&format!(
            "Key {} will be modified.\nOld: {}\nNew: {}\n\n",
            key, conflict.old, conflict.new
        ));
    }

    let count = format!("Number of conflicts found: {}", conflicts.len());
    if color {
        out.push_str(&count.yellow().to_string());
    } else {
        out.push_str(&count);
    }
    out.push('\n');
    out
}

/// Final status lines for text output.
pub fn format_report_text(report: &RunReport, color: bool) -> String {
    match report.status {
        RunStatus::Aborted => "Operation aborted.".to_string(),
        RunStatus::Saved => {
            let headline = "The new preferences have been saved.";
            let mut out = if color {
                headline.green().to_string()
            } else {
                headline.to_string()
            };
            if !report.follow_up_files.is_empty() {
                out.push_str("\nTo finish, import the following files into Eclipse\n");
                out.push_str("manually, wherever appropriate:\n");
                for file in &report.follow_up_files {
                    out.push('\n');
                    out.push_str(file);
                }
            }
            out
        }
        RunStatus::DryRun => format_dry_run(report),
    }
}

fn format_dry_run(report: &RunReport) -> String {
    let summary = &report.summary;
    let mut out = format!(
        "Dry run for {}: {} added, {} changed, {} unchanged. Nothing was written.",
        report.prefs_path.display(),
        summary.added.len(),
        summary.changed.len(),
        summary.unchanged.len()
    );

    if summary.is_noop() {
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Change"]);
    for key in &summary.added {
        table.add_row(vec![key.as_str(), "added"]);
    }
    for key in &summary.changed {
        table.add_row(vec![key.as_str(), "changed"]);
    }
    out.push('\n');
    out.push_str(&table.to_string());
    out
}

/// Pretty JSON rendering of the report.
pub fn format_report_json(report: &RunReport) -> Result<String, PrefsError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| PrefsError::Config(format!("Failed to serialize report: {}", e)))
}
