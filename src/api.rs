//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for UI clients, whatever they are (the mobile screens, a future
//! desktop shell, tests).
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Injects wall-clock time** (`chrono::Local`) where a command needs a
//!   date or timestamp; commands themselves stay clock-free so tests can
//!   pin time
//! - **Returns structured types**, never formatted output
//!
//! Business logic belongs in `commands/*`; storage behavior in `store/`.
//!
//! ## Generic Over Backend and Notifier
//!
//! `MedzApi<B, N>` is generic over the storage backend and the notification
//! service:
//! - Production: `MedzApi<FsBackend, PlatformNotifier>` (the platform
//!   notifier lives with the UI shell)
//! - Testing: `MedzApi<MemBackend, RecordingNotifier>`

use chrono::Local;
use uuid::Uuid;

use crate::commands;
use crate::commands::scan::ScanReport;
use crate::error::Result;
use crate::model::{DoseStatus, Medication, MedicationDraft, StatusRecord};
use crate::notify::{NotificationHandle, Notifier};
use crate::paths;
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::MedStore;

/// The main entry point for medz operations.
pub struct MedzApi<B: StorageBackend, N: Notifier> {
    store: MedStore<B>,
    notifier: N,
}

impl<N: Notifier> MedzApi<FsBackend, N> {
    /// Open the production store at the platform data directory.
    pub fn open_default(notifier: N) -> Result<Self> {
        Ok(Self::new(FsBackend::new(paths::data_dir()?), notifier))
    }
}

impl<B: StorageBackend, N: Notifier> MedzApi<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            store: MedStore::with_backend(backend),
            notifier,
        }
    }

    pub fn medications(&self) -> Result<Vec<Medication>> {
        self.store.list_medications()
    }

    pub fn statuses(&self) -> Result<Vec<StatusRecord>> {
        self.store.list_statuses()
    }

    pub fn status_for_today(&self, id: &Uuid) -> Result<Option<StatusRecord>> {
        self.store.status_for(id, Local::now().date_naive())
    }

    pub fn add_medication(&mut self, draft: MedicationDraft) -> Result<Medication> {
        commands::add::run(&mut self.store, &self.notifier, draft)
    }

    pub fn edit_medication(&mut self, id: Uuid, draft: MedicationDraft) -> Result<Medication> {
        commands::edit::run(&mut self.store, &self.notifier, id, draft)
    }

    pub fn remove_medication(&mut self, id: &Uuid) -> Result<Medication> {
        commands::remove::run(&mut self.store, &self.notifier, id)
    }

    /// Record today's answer to a dose prompt.
    pub fn record_dose(&mut self, id: &Uuid, status: DoseStatus) -> Result<StatusRecord> {
        commands::record::run(&mut self.store, id, Local::now().date_naive(), status)
    }

    /// Re-remind about a dose after `minutes`.
    pub fn snooze_dose(&self, id: &Uuid, minutes: u64) -> Result<NotificationHandle> {
        commands::snooze::run(&self.store, &self.notifier, id, minutes)
    }

    /// Periodic trigger entry point: the missed-dose scan.
    pub fn check_missed_doses(&self) -> Result<ScanReport> {
        commands::scan::run(&self.store, &self.notifier, Local::now().naive_local())
    }

    /// Periodic trigger entry point: today's status backfill.
    pub fn backfill_today(&mut self) -> Result<usize> {
        commands::backfill::run(&mut self.store, Local::now().date_naive())
    }

    pub fn has_visited(&self) -> Result<bool> {
        self.store.has_visited()
    }

    pub fn mark_visited(&mut self) -> Result<()> {
        self.store.mark_visited()
    }
}
