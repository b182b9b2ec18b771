use super::backend::StorageBackend;
use super::{HAS_VISITED_SLOT, MEDICATIONS_SLOT, STATUSES_SLOT};
use crate::error::{MedzError, Result};
use crate::model::{Medication, StatusRecord};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

pub struct MedStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> MedStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Load a whole collection from a slot. An absent slot reads as empty;
    /// so does an undecodable payload (the next save overwrites it).
    fn load_collection<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>> {
        let payload = match self.backend.read_slot(slot)? {
            Some(payload) => payload,
            None => return Ok(Vec::new()),
        };
        match serde_json::from_str(&payload) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(slot, %err, "undecodable slot payload, reading as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize and overwrite a whole collection. No partial writes.
    fn save_collection<T: Serialize>(&self, slot: &str, items: &[T]) -> Result<()> {
        let payload = serde_json::to_string_pretty(items)?;
        self.backend.write_slot(slot, &payload)
    }

    // --- Medications ---

    /// All medications, unordered.
    pub fn list_medications(&self) -> Result<Vec<Medication>> {
        self.load_collection(MEDICATIONS_SLOT)
    }

    pub fn get_medication(&self, id: &Uuid) -> Result<Medication> {
        self.list_medications()?
            .into_iter()
            .find(|m| m.id == *id)
            .ok_or(MedzError::MedicationNotFound(*id))
    }

    /// Append a medication and persist the collection.
    pub fn insert_medication(&mut self, med: &Medication) -> Result<()> {
        let mut meds = self.list_medications()?;
        meds.push(med.clone());
        self.save_collection(MEDICATIONS_SLOT, &meds)
    }

    /// Replace the medication with the same id. All fields are replaced.
    pub fn update_medication(&mut self, med: &Medication) -> Result<()> {
        let mut meds = self.list_medications()?;
        let existing = meds
            .iter_mut()
            .find(|m| m.id == med.id)
            .ok_or(MedzError::MedicationNotFound(med.id))?;
        *existing = med.clone();
        self.save_collection(MEDICATIONS_SLOT, &meds)
    }

    /// Remove a medication and cascade-delete its status records.
    /// Returns the removed record.
    pub fn delete_medication(&mut self, id: &Uuid) -> Result<Medication> {
        let mut meds = self.list_medications()?;
        let pos = meds
            .iter()
            .position(|m| m.id == *id)
            .ok_or(MedzError::MedicationNotFound(*id))?;
        let removed = meds.remove(pos);
        self.save_collection(MEDICATIONS_SLOT, &meds)?;

        // Statuses do not outlive their medication.
        self.delete_statuses_for(id)?;
        Ok(removed)
    }

    // --- Dose statuses ---

    pub fn list_statuses(&self) -> Result<Vec<StatusRecord>> {
        self.load_collection(STATUSES_SLOT)
    }

    pub fn status_for(&self, medication_id: &Uuid, date: NaiveDate) -> Result<Option<StatusRecord>> {
        Ok(self
            .list_statuses()?
            .into_iter()
            .find(|s| s.medication_id == *medication_id && s.date == date))
    }

    /// Replace the record with the same (medication, date) key, else append.
    pub fn upsert_status(&mut self, record: StatusRecord) -> Result<()> {
        let mut statuses = self.list_statuses()?;
        match statuses.iter_mut().find(|s| s.key() == record.key()) {
            Some(existing) => *existing = record,
            None => statuses.push(record),
        }
        self.save_collection(STATUSES_SLOT, &statuses)
    }

    /// Remove every status for one medication (cascade-delete).
    /// Returns how many were removed.
    pub fn delete_statuses_for(&mut self, medication_id: &Uuid) -> Result<usize> {
        let mut statuses = self.list_statuses()?;
        let before = statuses.len();
        statuses.retain(|s| s.medication_id != *medication_id);
        let removed = before - statuses.len();
        if removed > 0 {
            self.save_collection(STATUSES_SLOT, &statuses)?;
        }
        Ok(removed)
    }

    /// Insert a "not yet" row for `date` for each medication that has no
    /// record for that date. Existing rows are never touched, so a dose
    /// already answered today survives the daily pass. Returns how many
    /// rows were inserted.
    pub fn backfill_statuses(&mut self, medications: &[Medication], date: NaiveDate) -> Result<usize> {
        let mut statuses = self.list_statuses()?;
        let mut inserted = 0;
        for med in medications {
            let exists = statuses
                .iter()
                .any(|s| s.medication_id == med.id && s.date == date);
            if !exists {
                statuses.push(StatusRecord::not_yet(med.id, date));
                inserted += 1;
            }
        }
        if inserted > 0 {
            self.save_collection(STATUSES_SLOT, &statuses)?;
        }
        Ok(inserted)
    }

    // --- First-run marker ---

    /// Whether the first-run marker has been set. Consumed by the welcome
    /// flow in the UI layer.
    pub fn has_visited(&self) -> Result<bool> {
        Ok(matches!(
            self.backend.read_slot(HAS_VISITED_SLOT)?.as_deref(),
            Some("true")
        ))
    }

    pub fn mark_visited(&mut self) -> Result<()> {
        self.backend.write_slot(HAS_VISITED_SLOT, "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DoseStatus, FoodTiming, MedicationDraft, QuantityType};
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> MedStore<MemBackend> {
        MedStore::with_backend(MemBackend::new())
    }

    fn draft(name: &str, hour: u32, minute: u32) -> MedicationDraft {
        MedicationDraft {
            name: name.to_string(),
            hour,
            minute,
            food_timing: FoodTiming::AfterFood,
            quantity_type: QuantityType::Pills,
            quantity: 2.0,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // --- Medication CRUD ---

    #[test]
    fn test_insert_and_list() {
        let mut store = make_store();
        let med = Medication::new(draft("Aspirin", 9, 0));

        store.insert_medication(&med).unwrap();

        let meds = store.list_medications().unwrap();
        assert_eq!(meds.len(), 1);
        assert_eq!(meds[0], med);
    }

    #[test]
    fn test_list_empty_store() {
        let store = make_store();
        assert!(store.list_medications().unwrap().is_empty());
        assert!(store.list_statuses().unwrap().is_empty());
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut store = make_store();
        let med = Medication::new(draft("Aspirin", 9, 0));
        store.insert_medication(&med).unwrap();

        let mut edited = Medication::with_id(med.id, draft("Aspirin Forte", 21, 30));
        edited.quantity = 1.0;
        store.update_medication(&edited).unwrap();

        let found = store.get_medication(&med.id).unwrap();
        assert_eq!(found, edited);
        assert_eq!(store.list_medications().unwrap().len(), 1);
    }

    #[test]
    fn test_update_missing_id_errors() {
        let mut store = make_store();
        let med = Medication::new(draft("Ghost", 9, 0));

        let result = store.update_medication(&med);
        assert!(matches!(
            result,
            Err(MedzError::MedicationNotFound(id)) if id == med.id
        ));
    }

    #[test]
    fn test_delete_missing_id_leaves_collection_unchanged() {
        let mut store = make_store();
        let med = Medication::new(draft("Aspirin", 9, 0));
        store.insert_medication(&med).unwrap();

        let ghost = Uuid::new_v4();
        let result = store.delete_medication(&ghost);
        assert!(matches!(
            result,
            Err(MedzError::MedicationNotFound(id)) if id == ghost
        ));
        assert_eq!(store.list_medications().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_cascades_to_statuses() {
        let mut store = make_store();
        let keep = Medication::new(draft("Keep", 9, 0));
        let gone = Medication::new(draft("Drop", 10, 0));
        store.insert_medication(&keep).unwrap();
        store.insert_medication(&gone).unwrap();

        store
            .upsert_status(StatusRecord::new(keep.id, date("2024-01-01"), DoseStatus::Taken))
            .unwrap();
        store
            .upsert_status(StatusRecord::new(gone.id, date("2024-01-01"), DoseStatus::Taken))
            .unwrap();
        store
            .upsert_status(StatusRecord::new(gone.id, date("2024-01-02"), DoseStatus::NotTaken))
            .unwrap();

        let removed = store.delete_medication(&gone.id).unwrap();
        assert_eq!(removed.id, gone.id);

        let statuses = store.list_statuses().unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].medication_id, keep.id);
    }

    #[test]
    fn test_insert_propagates_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut store = MedStore::with_backend(backend);

        let med = Medication::new(draft("Aspirin", 9, 0));
        assert!(store.insert_medication(&med).is_err());
    }

    // --- Statuses ---

    #[test]
    fn test_upsert_replaces_by_key() {
        let mut store = make_store();
        let id = Uuid::new_v4();
        let day = date("2024-01-01");

        store
            .upsert_status(StatusRecord::new(id, day, DoseStatus::Taken))
            .unwrap();
        store
            .upsert_status(StatusRecord::new(id, day, DoseStatus::NotTaken))
            .unwrap();

        let statuses = store.list_statuses().unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].status, DoseStatus::NotTaken);
    }

    #[test]
    fn test_upsert_keeps_other_days() {
        let mut store = make_store();
        let id = Uuid::new_v4();

        store
            .upsert_status(StatusRecord::new(id, date("2024-01-01"), DoseStatus::Taken))
            .unwrap();
        store
            .upsert_status(StatusRecord::new(id, date("2024-01-02"), DoseStatus::NotTaken))
            .unwrap();

        assert_eq!(store.list_statuses().unwrap().len(), 2);
        assert_eq!(
            store.status_for(&id, date("2024-01-01")).unwrap().unwrap().status,
            DoseStatus::Taken
        );
    }

    #[test]
    fn test_status_for_absent_pair() {
        let store = make_store();
        assert!(store
            .status_for(&Uuid::new_v4(), date("2024-01-01"))
            .unwrap()
            .is_none());
    }

    // --- Backfill ---

    #[test]
    fn test_backfill_inserts_not_yet_rows() {
        let mut store = make_store();
        let meds = vec![
            Medication::new(draft("A", 9, 0)),
            Medication::new(draft("B", 10, 0)),
        ];

        let inserted = store.backfill_statuses(&meds, date("2024-01-01")).unwrap();
        assert_eq!(inserted, 2);

        let statuses = store.list_statuses().unwrap();
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| s.status == DoseStatus::NotYet));
        assert!(statuses.iter().all(|s| s.date == date("2024-01-01")));
    }

    #[test]
    fn test_backfill_is_idempotent() {
        let mut store = make_store();
        let meds = vec![Medication::new(draft("A", 9, 0))];

        store.backfill_statuses(&meds, date("2024-01-01")).unwrap();
        let again = store.backfill_statuses(&meds, date("2024-01-01")).unwrap();

        assert_eq!(again, 0);
        assert_eq!(store.list_statuses().unwrap().len(), 1);
    }

    #[test]
    fn test_backfill_never_overwrites_recorded_status() {
        let mut store = make_store();
        let med = Medication::new(draft("A", 9, 0));
        let day = date("2024-01-01");

        store
            .upsert_status(StatusRecord::new(med.id, day, DoseStatus::Taken))
            .unwrap();
        store.backfill_statuses(&[med.clone()], day).unwrap();

        let status = store.status_for(&med.id, day).unwrap().unwrap();
        assert_eq!(status.status, DoseStatus::Taken);
        assert_eq!(store.list_statuses().unwrap().len(), 1);
    }

    #[test]
    fn test_backfill_new_day_keeps_history() {
        let mut store = make_store();
        let med = Medication::new(draft("A", 9, 0));

        store
            .upsert_status(StatusRecord::new(med.id, date("2024-01-01"), DoseStatus::NotTaken))
            .unwrap();
        store
            .backfill_statuses(&[med.clone()], date("2024-01-02"))
            .unwrap();

        let statuses = store.list_statuses().unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(
            store.status_for(&med.id, date("2024-01-01")).unwrap().unwrap().status,
            DoseStatus::NotTaken
        );
        assert_eq!(
            store.status_for(&med.id, date("2024-01-02")).unwrap().unwrap().status,
            DoseStatus::NotYet
        );
    }

    // --- Corrupt slots ---

    #[test]
    fn test_undecodable_slot_reads_as_empty() {
        let backend = MemBackend::new();
        backend.write_slot(MEDICATIONS_SLOT, "{ not json").unwrap();
        let store = MedStore::with_backend(backend);

        assert!(store.list_medications().unwrap().is_empty());
    }

    // --- First-run marker ---

    #[test]
    fn test_visited_marker_roundtrip() {
        let mut store = make_store();
        assert!(!store.has_visited().unwrap());

        store.mark_visited().unwrap();
        assert!(store.has_visited().unwrap());
    }
}
