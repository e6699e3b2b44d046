//! Prefmerge: merge bundled Eclipse workbench preferences into a workspace.
//!
//! A small ordered-properties store that round-trips `.prefs` files with
//! comments and key order intact, plus a merge engine that lets bundled
//! values win after the user confirms any real conflicts.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod prefs;
pub mod workspace;

pub use error::PrefsError;
pub use merge::{find_conflicts, merge, summarize, Conflict, MergeSummary};
pub use prefs::{Entry, PropertyStore};
