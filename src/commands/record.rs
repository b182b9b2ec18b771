use crate::error::Result;
use crate::model::{DoseStatus, StatusRecord};
use crate::store::backend::StorageBackend;
use crate::store::MedStore;
use chrono::NaiveDate;
use uuid::Uuid;

/// Store the answer to a "did you take it?" prompt for one date.
/// Overwrites any earlier answer for the same (medication, date) pair.
pub fn run<B: StorageBackend>(
    store: &mut MedStore<B>,
    id: &Uuid,
    date: NaiveDate,
    status: DoseStatus,
) -> Result<StatusRecord> {
    // The referenced medication must exist; a prompt for a deleted
    // medication is answered too late.
    store.get_medication(id)?;

    let record = StatusRecord::new(*id, date, status);
    store.upsert_status(record)?;
    Ok(record)
}
