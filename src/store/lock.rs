//! Advisory locking of the store file.

use crate::constants::STORE_LOCK_SUFFIX;
use crate::errors::{AppResult, LockError};
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Exclusive lock held for the lifetime of the guard.
///
/// The lock lives on `<store>.lock` rather than on the store itself because
/// the store file is replaced by rename on every write.
#[derive(Debug)]
pub(crate) struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Takes the lock for `store_path` without waiting.
    ///
    /// # Errors
    ///
    /// Returns `LockError::StoreBusy` when another process holds the lock,
    /// `AppError::Io` when the store directory cannot be created and
    /// `LockError::AcquisitionFailed` for any other failure.
    pub(crate) fn acquire(store_path: &Path) -> AppResult<Self> {
        let path = lock_path(store_path);
        // The lock is the first thing to touch the store directory.
        super::ensure_parent_dir(store_path)?;

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: store_path.to_path_buf(),
                source,
            })?;

        file.try_lock_exclusive().map_err(|source| {
            if source.kind() == fs2::lock_contended_error().kind() {
                LockError::StoreBusy {
                    path: store_path.to_path_buf(),
                }
            } else {
                LockError::AcquisitionFailed {
                    path: store_path.to_path_buf(),
                    source,
                }
            }
        })?;

        debug!("Acquired store lock {:?}", path);
        Ok(StoreLock { file, path })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            debug!("Failed to release store lock {:?}: {}", self.path, e);
        }
    }
}

fn lock_path(store_path: &Path) -> PathBuf {
    let mut name: OsString = store_path.as_os_str().to_os_string();
    name.push(STORE_LOCK_SUFFIX);
    PathBuf::from(name)
}
