//! Ordered Property Store
//!
//! In-memory representation of an Eclipse `.prefs` file. Lines are kept in
//! file order as [`Entry`] tokens: comments (and blank lines) verbatim, and
//! properties as their raw pre-separator key text. Values live in a separate
//! lookup table keyed by the trimmed key, so re-serialization reproduces the
//! original layout while lookups ignore surrounding whitespace.

use crate::error::PrefsError;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Separator used by Eclipse preference files.
pub const DEFAULT_SEPARATOR: &str = "=";

/// One line of a preferences file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Raw line content without its terminator. Also used for blank lines.
    Comment(String),
    /// Raw text before the separator; may carry surrounding whitespace.
    Key(String),
}

impl Entry {
    /// Trimmed key for property entries, `None` for comments.
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::Key(token) => Some(token.trim()),
            Entry::Comment(_) => None,
        }
    }
}

/// A line is a comment when its first non-whitespace character is `#` or `;`.
pub fn is_comment(line: &str) -> bool {
    matches!(line.trim().chars().next(), Some('#') | Some(';'))
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Ordered key/value store preserving comments and key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyStore {
    entries: Vec<Entry>,
    values: HashMap<String, String>,
    separator: String,
}

impl PropertyStore {
    /// Create an empty store using `separator`.
    pub fn new(separator: impl Into<String>) -> Result<Self, PrefsError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(PrefsError::InvalidSeparator);
        }
        Ok(Self {
            entries: Vec::new(),
            values: HashMap::new(),
            separator,
        })
    }

    /// Parse preferences text.
    ///
    /// Comment and blank lines are kept verbatim. Lines holding `separator`
    /// become properties split on its first occurrence. Any other line is
    /// dropped. A repeated key keeps its first position and takes the last
    /// value.
    pub fn parse(text: &str, separator: &str) -> Result<Self, PrefsError> {
        let mut store = Self::new(separator)?;
        let mut dropped = 0usize;

        for line in text.lines() {
            if is_blank(line) || is_comment(line) {
                store.entries.push(Entry::Comment(line.to_string()));
                continue;
            }

            let Some((raw_key, value)) = line.split_once(separator) else {
                dropped += 1;
                continue;
            };

            store.insert_token(raw_key.to_string(), value.to_string());
        }

        if dropped > 0 {
            debug!(dropped, "Dropped lines without a separator");
        }

        Ok(store)
    }

    /// Load a preferences file.
    ///
    /// Returns `Ok(None)` when the file cannot be opened; the caller treats
    /// that as "no existing preferences". Failures after the file is open
    /// (including invalid UTF-8) are errors.
    pub fn load(path: &Path, separator: &str) -> Result<Option<Self>, PrefsError> {
        if separator.is_empty() {
            return Err(PrefsError::InvalidSeparator);
        }

        let mut file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Preferences file not readable");
                return Ok(None);
            }
        };

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| PrefsError::io(path, e))?;

        let store = Self::parse(&text, separator)?;
        debug!(
            path = %path.display(),
            keys = store.len(),
            lines = store.entries.len(),
            "Loaded preferences"
        );
        Ok(Some(store))
    }

    /// Serialize to text: one line per entry, each terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                Entry::Comment(line) => out.push_str(line),
                Entry::Key(token) => {
                    let value = self
                        .values
                        .get(token.trim())
                        .map(String::as_str)
                        .unwrap_or_default();
                    out.push_str(token);
                    out.push_str(&self.separator);
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
        out
    }

    /// Truncate `path` and write the store to it.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        fs::write(path, self.render()).map_err(|e| PrefsError::io(path, e))?;
        debug!(path = %path.display(), keys = self.len(), "Saved preferences");
        Ok(())
    }

    /// Write to a uniquely named sibling temporary file, then rename it over
    /// `path`.
    ///
    /// A symlinked target is resolved first so the link survives, and the
    /// replaced file's permissions carry over to the new one.
    pub fn save_atomic(&self, path: &Path) -> Result<(), PrefsError> {
        let target = match fs::canonicalize(path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
            Err(e) => return Err(PrefsError::io(path, e)),
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| PrefsError::io(&dir, e))?;
        let temp_path = temp.path().to_path_buf();
        temp.write_all(self.render().as_bytes())
            .map_err(|e| PrefsError::io(&temp_path, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| PrefsError::io(&temp_path, e))?;

        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| PrefsError::io(&temp_path, e))?;
        }

        // On failure the temp file is removed when the error drops.
        temp.persist(&target)
            .map_err(|e| PrefsError::io(&target, e.error))?;

        debug!(path = %target.display(), keys = self.len(), "Saved preferences atomically");
        Ok(())
    }

    /// Value for a trimmed key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Trimmed keys in entry order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(Entry::key)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Record a raw key token and its value. Existing keys keep their
    /// position and only have the value replaced.
    pub(crate) fn insert_token(&mut self, raw_key: String, value: String) {
        let key = raw_key.trim().to_string();
        if self.values.insert(key, value).is_none() {
            self.entries.push(Entry::Key(raw_key));
        }
    }

    /// Overwrite the value of an existing key.
    pub(crate) fn set_value(&mut self, key: &str, value: &str) {
        if let Some(slot) = self.values.get_mut(key) {
            value.clone_into(slot);
        }
    }
}
