//! Document-per-record storage.
//!
//! Each collection lives under `<data_dir>/<collection>/` with one directory
//! per record in the sharded layout provided by [`RecordId::sharded_dir`]:
//!
//! ```text
//! hms_data/
//!   patients/
//!     <s1>/
//!       <s2>/
//!         <32hex-id>/
//!           record.json
//! ```
//!
//! where `s1`/`s2` are the first four hex characters of the id. Documents are
//! serialized with serde_json. There is no locking beyond what the filesystem
//! provides; the deployment model is a single writer process.

use crate::error::{RecordError, RecordResult};
use hms_id::RecordId;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the document inside each record directory.
const RECORD_FILE_NAME: &str = "record.json";

/// Typed document storage for one collection.
#[derive(Clone, Debug)]
pub struct DocStore {
    root: PathBuf,
}

impl DocStore {
    /// Creates a store rooted at `<data_dir>/<collection>`.
    ///
    /// The directory is created lazily on first write, so constructing a
    /// store never touches the filesystem.
    pub fn new(data_dir: &Path, collection: &str) -> Self {
        Self {
            root: data_dir.join(collection),
        }
    }

    /// Writes (or overwrites) the document for `id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageDirCreation`, `Serialization`, or `FileWrite` on
    /// failure; a partially written record directory may remain.
    pub fn write<T: Serialize>(&self, id: &RecordId, doc: &T) -> RecordResult<()> {
        let dir = id.sharded_dir(&self.root);
        fs::create_dir_all(&dir).map_err(RecordError::StorageDirCreation)?;
        let json = serde_json::to_string_pretty(doc).map_err(RecordError::Serialization)?;
        fs::write(dir.join(RECORD_FILE_NAME), json).map_err(RecordError::FileWrite)
    }

    /// Reads the document for `id`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `FileRead` or `Deserialization` if the record exists but
    /// cannot be loaded.
    pub fn read<T: DeserializeOwned>(&self, id: &RecordId) -> RecordResult<Option<T>> {
        let path = id.sharded_dir(&self.root).join(RECORD_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(RecordError::FileRead)?;
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(RecordError::Deserialization)
    }

    /// Removes the record directory for `id`.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none
    /// existed.
    pub fn remove(&self, id: &RecordId) -> RecordResult<bool> {
        let dir = id.sharded_dir(&self.root);
        if !dir.join(RECORD_FILE_NAME).is_file() {
            return Ok(false);
        }
        fs::remove_dir_all(&dir).map_err(RecordError::FileDelete)?;
        Ok(true)
    }

    /// Lists every document in the collection.
    ///
    /// Traverses the sharded directory structure and deserializes each
    /// `record.json`. A document that cannot be read or parsed is logged as a
    /// warning and skipped rather than failing the whole listing. A missing
    /// collection directory yields an empty list.
    ///
    /// Ordering follows directory traversal and is not meaningful; callers
    /// needing a particular order sort the result.
    pub fn list<T: DeserializeOwned>(&self) -> Vec<T> {
        let mut docs = Vec::new();

        let s1_iter = match fs::read_dir(&self.root) {
            Ok(it) => it,
            Err(_) => return docs,
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };
            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };
                for id_ent in id_iter.flatten() {
                    let record_path = id_ent.path().join(RECORD_FILE_NAME);
                    if !record_path.is_file() {
                        continue;
                    }

                    let contents = match fs::read_to_string(&record_path) {
                        Ok(c) => c,
                        Err(e) => {
                            tracing::warn!("skipping unreadable record {:?}: {}", record_path, e);
                            continue;
                        }
                    };
                    match serde_json::from_str::<T>(&contents) {
                        Ok(doc) => docs.push(doc),
                        Err(e) => {
                            tracing::warn!("skipping unparsable record {:?}: {}", record_path, e);
                        }
                    }
                }
            }
        }

        docs
    }
}
