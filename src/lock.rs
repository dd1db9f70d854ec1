//! Exclusive lock for lifecycle operations.
//!
//! Cross-platform (fs2) advisory lock on <root>/.docver.lock:
//! - one mutating operation (freeze/remove/reset) per site root at a time;
//! - non-blocking: contention is reported as `LifecycleError::Locked`.
//!
//! Lock is released on Drop. The lock file itself stays: deleting it would let a
//! process still holding the old inode and a process on a fresh file both "own" the lock.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{LifecycleError, Result};

pub struct LockGuard {
    file: std::fs::File,
    path: PathBuf,
}

impl LockGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // Ошибки unlock на Drop игнорируем.
        let _ = self.file.unlock();
    }
}

/// Try to acquire the exclusive lock. Returns `Locked` if already held.
pub fn try_acquire_exclusive_lock(path: &Path) -> Result<LockGuard> {
    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| LifecycleError::io(path, e))?;
    if file.try_lock_exclusive().is_err() {
        return Err(LifecycleError::Locked {
            path: path.to_path_buf(),
        });
    }
    Ok(LockGuard {
        file,
        path: path.to_path_buf(),
    })
}
