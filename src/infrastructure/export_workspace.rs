// src/infrastructure/export_workspace.rs
//
// Export file staging
//
// CRITICAL RULES:
// - Generated files land in a dedicated directory, never beside user data
// - Writing is UTF-8 text only
// - The share step is the caller's job; this type hands back a path

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Directory where generated export files are staged before sharing
#[derive(Debug, Clone)]
pub struct ExportWorkspace {
    dir: PathBuf,
}

impl ExportWorkspace {
    /// Workspace under the platform cache directory:
    /// {CACHE}/trackhub/exports
    pub fn new() -> AppResult<Self> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AppError::Other("Could not determine cache directory".to_string()))?;
        Ok(Self::at(cache_dir.join("trackhub").join("exports")))
    }

    /// Workspace at a caller-owned location (tests, portable mode)
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one UTF-8 text file into the workspace and return its path
    pub fn write_text_file(&self, file_name: &str, content: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(AppError::Io)?;

        let path = self.dir.join(file_name);
        fs::write(&path, content).map_err(AppError::Io)?;

        log::debug!("wrote export file {:?} ({} bytes)", path, content.len());
        Ok(path)
    }

    /// Remove every staged file
    ///
    /// Files may already have been shared and copied elsewhere; the
    /// staging copies are disposable.
    pub fn clear(&self) -> AppResult<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(&self.dir).map_err(AppError::Io)? {
            let entry = entry.map_err(AppError::Io)?;
            if entry.file_type().map_err(AppError::Io)?.is_file() {
                fs::remove_file(entry.path()).map_err(AppError::Io)?;
            }
        }

        Ok(())
    }
}
