// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{EntityKind, StorageBackend};
use crate::error::PersistenceError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores each entity kind as a pretty-printed JSON array file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the
/// original, so a reader never sees a half-written collection.
#[derive(Debug, Clone)]
pub struct JsonDirectoryBackend {
    root: PathBuf,
}

impl JsonDirectoryBackend {
    /// Opens a storage directory, creating it and any missing collection
    /// files (as `[]`).
    ///
    /// # Arguments
    ///
    /// * `root` - The directory holding the collection files
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file cannot be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, PersistenceError> {
        let root: PathBuf = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|err| {
            PersistenceError::InitializationError(format!(
                "cannot create storage directory {}: {err}",
                root.display()
            ))
        })?;

        let backend: Self = Self { root };
        for kind in EntityKind::ALL {
            let path: PathBuf = backend.path_for(kind);
            if !path.exists() {
                debug!(path = %path.display(), "Creating empty collection file");
                write_array(&path, &[])?;
            }
        }

        info!(root = %backend.root.display(), "Opened JSON storage directory");
        Ok(backend)
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file a kind is stored in.
    #[must_use]
    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

fn read_array(path: &Path) -> Result<Vec<Value>, PersistenceError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents: String = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<Value> = serde_json::from_str(&contents)?;
    Ok(records)
}

fn write_array(path: &Path, records: &[Value]) -> Result<(), PersistenceError> {
    let contents: String = serde_json::to_string_pretty(records)?;
    let tmp_path: PathBuf = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl StorageBackend for JsonDirectoryBackend {
    fn load_all(&self, kind: EntityKind) -> Result<Vec<Value>, PersistenceError> {
        read_array(&self.path_for(kind))
    }

    fn append_one(&self, kind: EntityKind, record: Value) -> Result<(), PersistenceError> {
        let path: PathBuf = self.path_for(kind);
        let mut records: Vec<Value> = read_array(&path)?;
        records.push(record);
        write_array(&path, &records)
    }

    fn replace_all(&self, kind: EntityKind, records: Vec<Value>) -> Result<(), PersistenceError> {
        write_array(&self.path_for(kind), &records)
    }
}
