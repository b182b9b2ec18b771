use crate::error::Result;
use crate::notify::{NotificationContent, NotificationHandle, Notifier};
use crate::store::backend::StorageBackend;
use crate::store::MedStore;
use uuid::Uuid;

/// Delay a dose prompt: schedule a one-shot re-reminder after `minutes`.
/// Persists nothing; the medication's daily reminder is untouched.
pub fn run<B: StorageBackend, N: Notifier>(
    store: &MedStore<B>,
    notifier: &N,
    id: &Uuid,
    minutes: u64,
) -> Result<NotificationHandle> {
    let med = store.get_medication(id)?;
    notifier.schedule_once_after(minutes * 60, &NotificationContent::snooze_reminder(&med))
}
