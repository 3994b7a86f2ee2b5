//! Persisted hostname history for address-bar autocomplete
//!
//! The backing store is a plain text file, one hostname per line,
//! append-only. Duplicates are permitted; every successful connect appends
//! one line. Single-writer, single-reader, no locking - the application is
//! single-instance.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Default file name of the completion list inside the data directory
const COMPLETION_FILE_NAME: &str = "completion_list";

/// Append-only store of previously entered hostnames
#[derive(Debug, Clone)]
pub struct CompletionStore {
    path: PathBuf,
}

impl CompletionStore {
    /// Creates a store backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default location in the user data directory.
    ///
    /// Falls back to the current directory when no data directory can be
    /// resolved.
    #[must_use]
    pub fn default_location(app_dir: &str) -> Self {
        let dir = dirs::data_dir()
            .map_or_else(|| PathBuf::from("."), |d| d.join(app_dir));
        Self::new(dir.join(COMPLETION_FILE_NAME))
    }

    /// Returns the stored hostnames in file order.
    ///
    /// A missing backing file yields an empty list; read errors degrade to
    /// empty as well, so this never fails.
    #[must_use]
    pub fn load(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents.lines().map(ToString::to_string).collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read completion list");
                Vec::new()
            }
        }
    }

    /// Appends one hostname to the backing file.
    ///
    /// No deduplication and no validation: the caller appends exactly what
    /// was connected to, once per successful connect.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors; the caller decides whether a failed history
    /// write matters (the browser logs it and carries on).
    pub fn append(&self, hostname: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{hostname}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_empty_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = CompletionStore::new(dir.path().join("completion_list"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_then_load_preserves_order_and_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = CompletionStore::new(dir.path().join("completion_list"));

        store.append("host1").unwrap();
        store.append("host2").unwrap();
        store.append("host1").unwrap();

        assert_eq!(store.load(), vec!["host1", "host2", "host1"]);
    }

    #[test]
    fn append_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = CompletionStore::new(dir.path().join("nested/deeper/completion_list"));

        store.append("host1").unwrap();
        assert_eq!(store.load(), vec!["host1"]);
    }

    #[test]
    fn file_is_newline_delimited_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("completion_list");
        let store = CompletionStore::new(path.clone());

        store.append("host1").unwrap();
        store.append("host1").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "host1\nhost1\n");
    }
}
