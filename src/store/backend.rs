use crate::error::Result;

/// Abstract interface for raw slot storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while MedStore handles the "what" (typed collections, upserts, backfill).
pub trait StorageBackend {
    /// Read the raw serialized payload of a slot.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, slot: &str) -> Result<Option<String>>;

    /// Overwrite a slot with a new payload.
    /// MUST be atomic (e.g. write to tmp then rename) so a reader never
    /// observes a partial payload.
    fn write_slot(&self, slot: &str, payload: &str) -> Result<()>;

    /// Remove a slot entirely. Removing an absent slot is a no-op.
    fn delete_slot(&self, slot: &str) -> Result<()>;
}
