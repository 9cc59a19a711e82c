#![deny(missing_docs)]

//! # Staging Area
//!
//! Temporary on-disk home for partition documents while the generator reads them.
//!
//! A staging area is a dedicated directory created inside the input directory
//! with the reserved [`STAGING_PREFIX`]. Discovery skips anything carrying that
//! prefix, so leftovers from an interrupted run are never mistaken for inputs.
//! Staged files are removed when their guard drops; the directory is removed
//! when the area drops.

use crate::error::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reserved name prefix of staging directories and files.
pub const STAGING_PREFIX: &str = "_tmp_";

/// Returns `true` if `name` belongs to a staging area.
pub fn is_staging_name(name: &str) -> bool {
    name.starts_with(STAGING_PREFIX)
}

/// A per-document staging directory.
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    /// Creates a fresh staging directory inside `parent`.
    pub fn create_in(parent: &Path) -> AppResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)?;
        Ok(Self { dir })
    }

    /// Location of the staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `document` as JSON to `<area>/<_tmp_><stem>__<service>.json`.
    ///
    /// On failure any partially written file is removed before returning.
    pub fn stage<T>(&self, stem: &str, service: &str, document: &T) -> AppResult<StagedFile>
    where
        T: Serialize + ?Sized,
    {
        let path = self
            .dir
            .path()
            .join(format!("{}{}__{}.json", STAGING_PREFIX, stem, service));
        let staged = StagedFile { path };

        let body = serde_json::to_string_pretty(document).map_err(|e| AppError::StagingWrite {
            service: service.to_string(),
            reason: e.to_string(),
        })?;
        fs::write(&staged.path, body).map_err(|e| AppError::StagingWrite {
            service: service.to_string(),
            reason: format!("{}: {}", staged.path.display(), e),
        })?;

        Ok(staged)
    }

    /// Removes the staging directory and everything left in it.
    pub fn close(self) -> AppResult<()> {
        self.dir.close()?;
        Ok(())
    }
}

/// A staged partition file, deleted on drop.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                "Failed to remove staging file {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
