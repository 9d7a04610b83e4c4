//! Advisory lock touch-files in the output directory.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LockError {
    #[error("invalid name")]
    EmptyName,
    #[error("already locked: {0}")]
    AlreadyLocked(PathBuf),
    #[error("not locked: {0}")]
    NotLocked(PathBuf),
    #[error("lock file error: {0}")]
    Io(#[from] io::Error),
}

pub fn lock_path(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(format!("{name}.lock"))
}

pub fn lock(out_dir: &Path, name: &str) -> Result<PathBuf, LockError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LockError::EmptyName);
    }
    let path = lock_path(out_dir, name);
    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => Ok(path),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Err(LockError::AlreadyLocked(path))
        }
        Err(err) => Err(err.into()),
    }
}

pub fn unlock(out_dir: &Path, name: &str) -> Result<PathBuf, LockError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LockError::EmptyName);
    }
    let path = lock_path(out_dir, name);
    match fs::remove_file(&path) {
        Ok(()) => Ok(path),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(LockError::NotLocked(path)),
        Err(err) => Err(err.into()),
    }
}
