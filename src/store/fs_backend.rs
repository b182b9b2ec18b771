use super::backend::StorageBackend;
use crate::error::{MedzError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one `<slot>.json` file per slot under a single root
/// directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }

    fn ensure_root(&self, slot: &str) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|source| MedzError::SlotWrite {
                slot: slot.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(|source| MedzError::SlotRead {
            slot: slot.to_string(),
            source,
        })?;
        Ok(Some(payload))
    }

    fn write_slot(&self, slot: &str, payload: &str) -> Result<()> {
        self.ensure_root(slot)?;

        let target = self.slot_path(slot);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", slot, Uuid::new_v4()));
        fs::write(&tmp, payload).map_err(|source| MedzError::SlotWrite {
            slot: slot.to_string(),
            source,
        })?;
        fs::rename(&tmp, &target).map_err(|source| MedzError::SlotWrite {
            slot: slot.to_string(),
            source,
        })?;

        Ok(())
    }

    fn delete_slot(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path).map_err(|source| MedzError::SlotWrite {
                slot: slot.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}
