use crate::error::Result;
use crate::model::Medication;
use crate::notify::Notifier;
use crate::store::backend::StorageBackend;
use crate::store::MedStore;
use uuid::Uuid;

/// Delete a medication: cancel its daily reminder, remove the record, and
/// cascade-delete its status history. Returns the removed record.
pub fn run<B: StorageBackend, N: Notifier>(
    store: &mut MedStore<B>,
    notifier: &N,
    id: &Uuid,
) -> Result<Medication> {
    let med = store.get_medication(id)?;
    if let Some(handle) = &med.notification_id {
        notifier.cancel(handle)?;
    }
    store.delete_medication(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, record};
    use crate::error::MedzError;
    use crate::model::{DoseStatus, FoodTiming, MedicationDraft, QuantityType};
    use crate::notify::RecordingNotifier;
    use crate::store::mem_backend::MemBackend;
    use chrono::NaiveDate;

    fn draft(name: &str) -> MedicationDraft {
        MedicationDraft {
            name: name.to_string(),
            hour: 8,
            minute: 15,
            food_timing: FoodTiming::BeforeFood,
            quantity_type: QuantityType::Pills,
            quantity: 1.0,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_remove_cancels_and_cascades() {
        let mut store = MedStore::with_backend(MemBackend::new());
        let notifier = RecordingNotifier::new();

        let med = add::run(&mut store, &notifier, draft("Aspirin")).unwrap();
        record::run(&mut store, &med.id, date("2024-01-01"), DoseStatus::Taken).unwrap();

        let removed = run(&mut store, &notifier, &med.id).unwrap();

        assert_eq!(removed.id, med.id);
        assert_eq!(notifier.cancelled(), vec![med.notification_id.unwrap()]);
        assert!(store.list_medications().unwrap().is_empty());
        assert!(store.list_statuses().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_errors() {
        let mut store = MedStore::with_backend(MemBackend::new());
        let notifier = RecordingNotifier::new();

        let ghost = Uuid::new_v4();
        let result = run(&mut store, &notifier, &ghost);

        assert!(matches!(
            result,
            Err(MedzError::MedicationNotFound(id)) if id == ghost
        ));
        assert!(notifier.cancelled().is_empty());
    }
}
