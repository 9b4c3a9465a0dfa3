//! JSON file writers
//!
//! Provides the debug snapshot of the latest raw timeline page and the
//! results file written by the CLI.

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overwrites one file with the most recent raw response
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    /// Create a writer for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the snapshot path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the snapshot with `value`, pretty-printed
    pub async fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write snapshot '{}': {e}", self.path.display()),
            ))
        })?;
        debug!("Wrote snapshot to {}", self.path.display());
        Ok(())
    }
}

/// Write `value` to `path` as pretty-printed JSON, creating parent directories
pub fn write_json_file<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
