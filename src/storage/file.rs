//! File backed storage: one JSON object mapping keys to string values.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use super::{Result, StorageService};
use crate::error::StorageError;

/// Persists every key to a single JSON document on disk. The file is the
/// only copy of the data: every read parses it again and every mutation
/// rewrites it with the one key changed.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unparsable file is logged and treated as empty (it is replaced on the
    /// next write).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let storage = Self {
            path: path.as_ref().to_path_buf(),
        };

        let values = storage.read()?;

        log::debug!(
            "opened storage {} with {} key(s)",
            storage.path.display(),
            values.len()
        );

        Ok(storage)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&contents) {
            Ok(values) => Ok(values),
            Err(e) => {
                log::warn!(
                    "failed to parse storage file {}, treating it as empty: {e}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let serialized = serde_json::to_string_pretty(values)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| {
                StorageError::Write {
                    path: self.path.clone(),
                    source,
                }
            })?;
        }

        fs::write(&self.path, serialized).map_err(|source| {
            StorageError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl StorageService for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());
        self.write(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.read()?;
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.write(&values)
    }
}

#[cfg(test)]
#[path = "./file_tests.rs"]
mod tests;
