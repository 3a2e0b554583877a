use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use dashmap::DashMap;
use tracing::debug;

use crate::dao::storage::{StorageError, StorageResult};

use super::KeyValueStore;

const DOCUMENT_EXTENSION: &str = "json";
/// Scratch document written and removed by [`FileKeyValueStore::health_check`].
const HEALTHCHECK_FILE: &str = ".healthcheck";

/// Key-value store keeping one JSON document per key inside a data directory.
///
/// Keys whose last write failed are remembered until a later write of the same
/// key succeeds; the health check reports them.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: PathBuf,
    failed_writes: DashMap<String, String>,
}

impl FileKeyValueStore {
    /// Build a store rooted at `root`. The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            failed_writes: DashMap::new(),
        }
    }

    /// Directory holding the documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        {
            return Err(StorageError::InvalidKey { key: key.into() });
        }

        Ok(self.root.join(format!("{key}.{DOCUMENT_EXTENSION}")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.document_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.into(),
                path,
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.document_path(key)?;
        match write_atomically(&self.root, &path, &value) {
            Ok(()) => {
                self.failed_writes.remove(key);
                Ok(())
            }
            Err((failed_path, source)) => {
                self.failed_writes.insert(key.to_string(), source.to_string());
                Err(StorageError::Write {
                    key: key.into(),
                    path: failed_path,
                    source,
                })
            }
        }
    }

    fn health_check(&self) -> StorageResult<()> {
        let marker = self.root.join(HEALTHCHECK_FILE);
        write_atomically(&self.root, &marker, "{}").map_err(|(path, source)| {
            StorageError::unavailable(
                format!("data directory `{}` is not writable", path.display()),
                source,
            )
        })?;
        if let Err(err) = fs::remove_file(&marker) {
            debug!(path = %marker.display(), error = %err, "failed to remove health check marker");
        }

        let mut keys = self
            .failed_writes
            .iter()
            .map(|entry| entry.key().clone())
            .collect::<Vec<_>>();
        if keys.is_empty() {
            return Ok(());
        }
        keys.sort();
        Err(StorageError::FailedWrites { keys })
    }
}

/// Full rewrite through a sibling temp file so readers never see a torn document.
fn write_atomically(root: &Path, path: &Path, value: &str) -> Result<(), (PathBuf, std::io::Error)> {
    fs::create_dir_all(root).map_err(|source| (root.to_path_buf(), source))?;

    let staging = path.with_extension(format!("{DOCUMENT_EXTENSION}.tmp"));
    fs::write(&staging, value).map_err(|source| (staging.clone(), source))?;
    fs::rename(&staging, path).map_err(|source| (path.to_path_buf(), source))
}
