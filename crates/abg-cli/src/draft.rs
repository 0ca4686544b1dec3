//! Persistence of the in-progress form values.
//!
//! The draft is a single JSON object of raw field strings stored under
//! [`DRAFT_KEY`]. Every operation is best-effort: failures are logged and
//! never surface to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use abg_types::RawPanel;

/// Storage key of the form draft.
pub const DRAFT_KEY: &str = "agd-form-values";

/// File-backed store for the form draft.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    /// Creates a store keeping its draft inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", DRAFT_KEY)),
        }
    }

    /// Default draft directory: `$HOME/.abg`, or a temp directory without a home.
    pub fn default_dir() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) if !home.is_empty() => PathBuf::from(home).join(".abg"),
            _ => std::env::temp_dir().join("abg"),
        }
    }

    /// Returns the draft file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved draft.
    ///
    /// Returns `None` if there is no draft or it cannot be read or parsed.
    pub fn load(&self) -> Option<RawPanel> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved draft");
                return None;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "could not read draft: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(draft) => Some(draft),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring malformed draft: {}", e);
                None
            }
        }
    }

    /// Saves the draft, replacing any previous one.
    pub fn save(&self, draft: &RawPanel) {
        if let Err(e) = self.write(draft) {
            tracing::warn!(path = %self.path.display(), "could not save draft: {}", e);
        }
    }

    /// Removes the saved draft.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "draft cleared"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), "could not clear draft: {}", e),
        }
    }

    fn write(&self, draft: &RawPanel) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(draft)?;
        fs::write(&self.path, json)
    }
}
