//! CLI domain: parse, prompt, route, presentation, and output only.
//! Merge semantics live in `prefs` and `merge`; the route drives them.

mod output;
mod parse;
mod presentation;
mod prompt;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_conflicts, format_report_json, format_report_text};
pub use prompt::{
    default_prompt, is_affirmative, ConfirmPrompt, ForcedPrompt, LinePrompt, TerminalPrompt,
};
pub use route::{RunContext, RunOptions, RunReport, RunStatus, CONFIRM_QUESTION};
