use crate::error::{MedzError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Resolve the default data directory for the production store, creating it
/// on first use.
pub fn data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "medz")
        .ok_or_else(|| MedzError::Store("Could not determine a data directory".to_string()))?;
    let dir = dirs.data_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .map_err(|e| MedzError::Store(format!("Could not create data directory: {}", e)))?;
    }
    Ok(dir)
}
