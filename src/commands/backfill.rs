use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::MedStore;
use chrono::NaiveDate;
use tracing::debug;

/// Daily status backfill, invoked by the external periodic trigger
/// (roughly every 24 hours). Gives every medication a "not yet" row for
/// `date` without disturbing rows already recorded. Returns how many rows
/// were inserted.
pub fn run<B: StorageBackend>(store: &mut MedStore<B>, date: NaiveDate) -> Result<usize> {
    let medications = store.list_medications()?;
    let inserted = store.backfill_statuses(&medications, date)?;
    debug!(%date, inserted, "status backfill complete");
    Ok(inserted)
}
