//! The storage driver: write, read, read_all, delete
//!
//! All operations funnel through one [`Driver`] instance that is expected
//! to be shared across threads. Writers and deleters serialize on a
//! per-collection mutex; readers never lock and rely on the atomic rename
//! performed by the write path to observe only complete record bodies.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::observability::{ConsoleLogger, Logger, Severity};

use super::errors::{StoreError, StoreResult};
use super::locks::LockTable;
use super::paths;

/// Construction configuration for [`Driver`].
///
/// The logger is the only tunable; leaving it unset resolves to a console
/// logger at Info severity.
#[derive(Default)]
pub struct Options {
    pub logger: Option<Arc<dyn Logger>>,
}

/// File-backed document store.
///
/// Maps (collection, resource) identifiers to `<root>/<collection>/
/// <resource>.json`, persists records as pretty-printed JSON with a
/// trailing newline, and guarantees that a record file is replaced
/// atomically.
pub struct Driver {
    root: PathBuf,
    locks: LockTable,
    log: Arc<dyn Logger>,
}

impl Driver {
    /// Opens a store rooted at `root`, creating the directory (parents
    /// included) if it does not exist yet.
    ///
    /// Opening an existing root succeeds and reuses it as-is.
    pub fn open(root: impl AsRef<Path>, options: Options) -> StoreResult<Self> {
        let root = paths::normalize(root.as_ref());
        let log = options
            .logger
            .unwrap_or_else(|| Arc::new(ConsoleLogger::new(Severity::Info)));

        let driver = Self {
            root,
            locks: LockTable::new(),
            log,
        };

        if driver.root.metadata().is_ok() {
            driver.log.debug(&format!(
                "using '{}' (store already exists)",
                driver.root.display()
            ));
            return Ok(driver);
        }

        driver.log.debug(&format!(
            "creating '{}' (store does not exist)",
            driver.root.display()
        ));
        fs::create_dir_all(&driver.root).map_err(|e| {
            StoreError::io(
                format!("failed to create store root {}", driver.root.display()),
                e,
            )
        })?;

        Ok(driver)
    }

    /// Returns the normalized root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persists `value` as the record (`collection`, `resource`).
    ///
    /// The record is serialized to indented JSON with a trailing newline,
    /// written to a `.tmp` sibling, and renamed into place. A failure
    /// before the rename leaves any prior record untouched; the stray temp
    /// file is not cleaned up.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        resource: &str,
        value: &T,
    ) -> StoreResult<()> {
        if collection.is_empty() {
            return Err(StoreError::MissingCollection);
        }
        if resource.is_empty() {
            return Err(StoreError::MissingResource);
        }

        let lock = self.locks.collection(collection);
        // A poisoned lock means a writer panicked mid-operation; the record
        // on disk is still a complete old or new body, so keep going.
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let dir = paths::collection_dir(&self.root, collection);
        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::io(
                format!("failed to create collection directory {}", dir.display()),
                e,
            )
        })?;

        let mut body = serde_json::to_vec_pretty(value)?;
        body.push(b'\n');

        let final_path = paths::record_file(&self.root, collection, resource);
        let mut tmp_name = final_path.as_os_str().to_os_string();
        tmp_name.push(paths::TEMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, &body).map_err(|e| {
            StoreError::io(
                format!("failed to write record {}", tmp_path.display()),
                e,
            )
        })?;

        fs::rename(&tmp_path, &final_path).map_err(|e| {
            StoreError::io(
                format!("failed to persist record {}", final_path.display()),
                e,
            )
        })
    }

    /// Reads the record (`collection`, `resource`) and deserializes it.
    ///
    /// No lock is taken; a read racing a write observes either the old or
    /// the new file. The resource may be named with or without the stored
    /// `.json` extension.
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> StoreResult<T> {
        if collection.is_empty() {
            return Err(StoreError::MissingCollection);
        }
        if resource.is_empty() {
            return Err(StoreError::MissingResource);
        }

        let target = paths::collection_dir(&self.root, collection).join(resource);
        let target = paths::resolve_existing(&target)
            .ok_or_else(|| StoreError::not_found(format!("{}/{}", collection, resource)))?;

        let bytes = fs::read(&target).map_err(|e| {
            StoreError::io(format!("failed to read record {}", target.display()), e)
        })?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Reads every record in `collection` and returns the raw JSON blobs,
    /// ordered by file name.
    ///
    /// Deserialization into typed values is the caller's responsibility,
    /// one record at a time. Any individual read failure aborts the call.
    pub fn read_all(&self, collection: &str) -> StoreResult<Vec<String>> {
        if collection.is_empty() {
            return Err(StoreError::MissingCollection);
        }

        let dir = paths::collection_dir(&self.root, collection);
        let dir = paths::resolve_existing(&dir)
            .ok_or_else(|| StoreError::not_found(collection.to_string()))?;

        let entries = fs::read_dir(&dir).map_err(|e| {
            StoreError::io(format!("failed to list collection {}", dir.display()), e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                StoreError::io(format!("failed to list collection {}", dir.display()), e)
            })?;
            names.push(entry.file_name());
        }
        names.sort();

        let mut records = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(&name);
            let blob = fs::read_to_string(&path).map_err(|e| {
                StoreError::io(format!("failed to read record {}", path.display()), e)
            })?;
            records.push(blob);
        }

        Ok(records)
    }

    /// Deletes the record (`collection`, `resource`).
    ///
    /// The target is resolved with the same dual existence check as
    /// `read`, so the resource may be named with or without the stored
    /// extension. A resource that was materialized as a directory is
    /// removed recursively.
    pub fn delete(&self, collection: &str, resource: &str) -> StoreResult<()> {
        if collection.is_empty() {
            return Err(StoreError::MissingCollection);
        }
        if resource.is_empty() {
            return Err(StoreError::MissingResource);
        }

        let lock = self.locks.collection(collection);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let target = paths::collection_dir(&self.root, collection).join(resource);
        let target = paths::resolve_existing(&target)
            .ok_or_else(|| StoreError::not_found(format!("{}/{}", collection, resource)))?;

        let meta = target.metadata().map_err(|e| {
            StoreError::io(format!("failed to stat {}", target.display()), e)
        })?;

        if meta.is_dir() {
            fs::remove_dir_all(&target).map_err(|e| {
                StoreError::io(format!("failed to remove {}", target.display()), e)
            })
        } else if meta.is_file() {
            fs::remove_file(&target).map_err(|e| {
                StoreError::io(format!("failed to remove {}", target.display()), e)
            })
        } else {
            Ok(())
        }
    }

    /// Removes an entire collection and every record in it.
    pub fn delete_collection(&self, collection: &str) -> StoreResult<()> {
        if collection.is_empty() {
            return Err(StoreError::MissingCollection);
        }

        let lock = self.locks.collection(collection);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let dir = paths::collection_dir(&self.root, collection);
        if dir.metadata().is_err() {
            return Err(StoreError::not_found(collection.to_string()));
        }

        fs::remove_dir_all(&dir)
            .map_err(|e| StoreError::io(format!("failed to remove {}", dir.display()), e))
    }
}
