//! Local state store.
//!
//! This module owns the three flat JSON documents the tutor keeps on disk:
//!
//! - `katas_index.json` — static index of known kata (built externally)
//! - `config.json` — single-user configuration
//! - `user_history.json` — snapshot of the completed-kata history
//!
//! All reads and writes are whole-document; there are no partial updates
//! and no locking (single-user, single-process). An absent document is a
//! normal outcome (`Ok(None)`), distinct from a document that exists but
//! fails to parse ([`StoreError::CorruptData`]).

mod schema;

pub use schema::{ExerciseSummary, UserConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::CompletedRecord;
use crate::error::StoreError;

/// File name of the kata index document.
pub const INDEX_FILE: &str = "katas_index.json";
/// File name of the user configuration document.
pub const CONFIG_FILE: &str = "config.json";
/// File name of the history snapshot document.
pub const HISTORY_FILE: &str = "user_history.json";

/// Store for the three JSON documents under a single data directory.
#[derive(Debug, Clone)]
pub struct StateStore {
    data_dir: PathBuf,
}

impl StateStore {
    /// Create a store rooted at `data_dir`.
    ///
    /// The directory is not created here; it is created on first write.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this store reads and writes under.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read the kata index.
    ///
    /// Returns `Ok(None)` if the index file does not exist; regenerating it
    /// is the external indexer's job.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptData`] if the file exists but fails to
    /// parse, or [`StoreError::Io`] if it cannot be read.
    pub fn read_index(&self) -> Result<Option<Vec<ExerciseSummary>>, StoreError> {
        self.read_doc(INDEX_FILE)
    }

    /// Read the user configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptData`] if the file exists but fails to
    /// parse, or [`StoreError::Io`] if it cannot be read.
    pub fn read_config(&self) -> Result<Option<UserConfig>, StoreError> {
        self.read_doc(CONFIG_FILE)
    }

    /// Read the cached history snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptData`] if the file exists but fails to
    /// parse, or [`StoreError::Io`] if it cannot be read.
    pub fn read_history(&self) -> Result<Option<Vec<CompletedRecord>>, StoreError> {
        self.read_doc(HISTORY_FILE)
    }

    /// Overwrite the history snapshot wholesale.
    ///
    /// The data directory is created if absent. The document is written to
    /// a temp file and renamed into place so a crash mid-write never leaves
    /// a half-written snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be
    /// written.
    pub fn write_history(&self, records: &[CompletedRecord]) -> Result<(), StoreError> {
        self.write_doc(HISTORY_FILE, records)
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    fn read_doc<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        let path = self.file_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| StoreError::Io {
            file: name.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::CorruptData {
                file: name.to_string(),
                message: e.to_string(),
            })
    }

    fn write_doc<T: Serialize + ?Sized>(&self, name: &str, data: &T) -> Result<(), StoreError> {
        let io_err = |e: std::io::Error| StoreError::Io {
            file: name.to_string(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.data_dir).map_err(io_err)?;

        let json = serde_json::to_string_pretty(data).map_err(|e| StoreError::Io {
            file: name.to_string(),
            message: e.to_string(),
        })?;

        let path = self.file_path(name);
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path).map_err(io_err)?;
        file.write_all(json.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;

        fs::rename(&tmp_path, &path).map_err(io_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, StateStore) {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        (dir, store)
    }

    fn record(id: &str) -> CompletedRecord {
        CompletedRecord {
            id: id.to_string(),
            name: String::new(),
            slug: String::new(),
            completed_at: None,
            completed_languages: Vec::new(),
        }
    }

    #[test]
    fn test_read_index_absent_is_none() {
        let (_dir, store) = make_test_store();
        assert_eq!(store.read_index().unwrap(), None);
    }

    #[test]
    fn test_read_index_parses_entries() {
        let (dir, store) = make_test_store();
        fs::write(
            dir.path().join(INDEX_FILE),
            r#"[{"id":"a1","name":"Valid Braces"},{"id":"b2","name":"Sum Array"}]"#,
        )
        .unwrap();

        let index = store.read_index().unwrap().unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index[1].id, "b2");
        assert_eq!(index[1].name, "Sum Array");
    }

    #[test]
    fn test_read_index_corrupt_is_error() {
        let (dir, store) = make_test_store();
        fs::write(dir.path().join(INDEX_FILE), "{not valid json").unwrap();

        let err = store.read_index().unwrap_err();
        assert!(
            matches!(err, StoreError::CorruptData { ref file, .. } if file == INDEX_FILE),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_read_config_absent_vs_present() {
        let (dir, store) = make_test_store();
        assert_eq!(store.read_config().unwrap(), None);

        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"codewars_username": "someuser"}"#,
        )
        .unwrap();
        let config = store.read_config().unwrap().unwrap();
        assert_eq!(config.codewars_username.as_deref(), Some("someuser"));
    }

    #[test]
    fn test_read_config_without_username_field() {
        let (dir, store) = make_test_store();
        fs::write(dir.path().join(CONFIG_FILE), "{}").unwrap();

        let config = store.read_config().unwrap().unwrap();
        assert_eq!(config.codewars_username, None);
    }

    #[test]
    fn test_write_history_creates_dir_and_round_trips() {
        let dir = TempDir::new().unwrap();
        // Point at a subdirectory that does not exist yet
        let store = StateStore::new(dir.path().join("data"));

        store.write_history(&[record("a1"), record("b2")]).unwrap();

        let history = store.read_history().unwrap().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, "a1");
    }

    #[test]
    fn test_write_history_overwrites_wholesale() {
        let (_dir, store) = make_test_store();
        store.write_history(&[record("a1"), record("b2")]).unwrap();
        store.write_history(&[record("c3")]).unwrap();

        let history = store.read_history().unwrap().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, "c3");
    }

    #[test]
    fn test_write_history_leaves_no_tmp_file() {
        let (dir, store) = make_test_store();
        store.write_history(&[record("a1")]).unwrap();

        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn test_read_history_corrupt_is_error() {
        let (dir, store) = make_test_store();
        fs::write(dir.path().join(HISTORY_FILE), "][").unwrap();
        assert!(matches!(
            store.read_history().unwrap_err(),
            StoreError::CorruptData { .. }
        ));
    }
}
