use crate::error::Result;
use crate::model::{Medication, MedicationDraft};
use crate::notify::{NotificationContent, Notifier};
use crate::store::backend::StorageBackend;
use crate::store::MedStore;
use uuid::Uuid;

/// Replace every field of an existing medication. The old daily reminder
/// is cancelled before the replacement is scheduled, then the record is
/// persisted with the new handle.
pub fn run<B: StorageBackend, N: Notifier>(
    store: &mut MedStore<B>,
    notifier: &N,
    id: Uuid,
    draft: MedicationDraft,
) -> Result<Medication> {
    draft.validate()?;

    let old = store.get_medication(&id)?;
    if let Some(handle) = &old.notification_id {
        notifier.cancel(handle)?;
    }

    let mut med = Medication::with_id(id, draft);
    let handle = notifier.schedule_daily(
        med.hour,
        med.minute,
        &NotificationContent::dose_reminder(&med),
    )?;
    med.notification_id = Some(handle);

    store.update_medication(&med)?;
    Ok(med)
}
