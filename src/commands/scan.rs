use crate::error::{MedzError, Result};
use crate::model::{DoseStatus, Medication};
use crate::notify::{NotificationContent, Notifier};
use crate::store::backend::StorageBackend;
use crate::store::MedStore;
use chrono::NaiveDateTime;
use tracing::warn;
use uuid::Uuid;

/// Outcome of one missed-dose scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Medications alerted this pass, in scan order.
    pub alerted: Vec<Uuid>,
    /// Per-medication failures that were logged and skipped.
    pub failures: Vec<(Uuid, MedzError)>,
}

/// Missed-dose scan, invoked by the external periodic trigger (roughly
/// every 15 minutes).
///
/// A dose counts as missed when its scheduled time-of-day is already past
/// and no "taken" status exists for today's date. The check is date-naive:
/// nothing records that an alert was already sent, so a later scan on the
/// same day alerts again unless the dose has been recorded as taken.
///
/// Failures are isolated per medication: a scheduling or storage error on
/// one record is logged and collected in the report, and the remaining
/// medications are still checked.
pub fn run<B: StorageBackend, N: Notifier>(
    store: &MedStore<B>,
    notifier: &N,
    now: NaiveDateTime,
) -> Result<ScanReport> {
    let medications = store.list_medications()?;
    let mut report = ScanReport::default();

    for med in &medications {
        match check_one(store, notifier, med, now) {
            Ok(true) => report.alerted.push(med.id),
            Ok(false) => {}
            Err(err) => {
                warn!(medication = %med.id, %err, "missed-dose check failed, continuing");
                report.failures.push((med.id, err));
            }
        }
    }

    Ok(report)
}

fn check_one<B: StorageBackend, N: Notifier>(
    store: &MedStore<B>,
    notifier: &N,
    med: &Medication,
    now: NaiveDateTime,
) -> Result<bool> {
    if med.scheduled_time() >= now.time() {
        return Ok(false);
    }

    let taken = matches!(
        store.status_for(&med.id, now.date())?,
        Some(status) if status.status == DoseStatus::Taken
    );
    if taken {
        return Ok(false);
    }

    notifier.schedule_once_after(1, &NotificationContent::missed_dose(med))?;
    Ok(true)
}
