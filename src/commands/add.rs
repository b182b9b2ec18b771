use crate::error::Result;
use crate::model::{Medication, MedicationDraft};
use crate::notify::{NotificationContent, Notifier};
use crate::store::backend::StorageBackend;
use crate::store::MedStore;

/// Create a medication: validate the draft, schedule its daily reminder,
/// persist the record with the returned handle.
///
/// If the persist step fails the already-scheduled notification is
/// orphaned; the storage error still reaches the caller.
pub fn run<B: StorageBackend, N: Notifier>(
    store: &mut MedStore<B>,
    notifier: &N,
    draft: MedicationDraft,
) -> Result<Medication> {
    draft.validate()?;

    let mut med = Medication::new(draft);
    let handle = notifier.schedule_daily(
        med.hour,
        med.minute,
        &NotificationContent::dose_reminder(&med),
    )?;
    med.notification_id = Some(handle);

    store.insert_medication(&med)?;
    Ok(med)
}
