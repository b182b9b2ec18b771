//! # Notification Service Seam
//!
//! The device notification scheduler is an external collaborator. This
//! module defines the [`Notifier`] trait the core calls through, the opaque
//! [`NotificationHandle`] it hands back, and the [`NotificationContent`]
//! payload.
//!
//! Content is structured: every request carries the `medication_id` next to
//! the human-readable title/body, so a consumer reacting to a delivered
//! notification resolves the medication by id and never by parsing the body
//! text.
//!
//! [`RecordingNotifier`] is the in-memory implementation for testing and
//! development, mirroring the store's memory backend.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use uuid::Uuid;

use crate::error::{MedzError, Result};
use crate::model::Medication;

/// Opaque reference to a scheduled platform notification. Persisted on the
/// medication record and used later to cancel that specific notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationHandle(String);

impl NotificationHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NotificationHandle {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for NotificationHandle {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub medication_id: Uuid,
    pub title: String,
    pub body: String,
}

impl NotificationContent {
    /// The recurring daily reminder shown at the scheduled time.
    pub fn dose_reminder(med: &Medication) -> Self {
        Self {
            medication_id: med.id,
            title: "💊 Medication Reminder".to_string(),
            body: format!("It's time to take your {} ({})", med.name, med.food_timing),
        }
    }

    /// Fired by the periodic scan when a scheduled dose has passed without
    /// being recorded as taken.
    pub fn missed_dose(med: &Medication) -> Self {
        Self {
            medication_id: med.id,
            title: "💊 Missed Dose".to_string(),
            body: format!("You missed your dose of {}", med.name),
        }
    }

    /// The delayed re-reminder after the user snoozes a dose prompt.
    pub fn snooze_reminder(med: &Medication) -> Self {
        Self {
            medication_id: med.id,
            title: "⏰ Medication Reminder".to_string(),
            body: format!("Reminder after snooze: It's time to take your {}.", med.name),
        }
    }
}

/// Abstract interface to the platform notification scheduler.
///
/// Calls are fire-and-forget beyond awaiting the handle; there is no
/// delivery feedback and no cancellation of in-flight calls.
pub trait Notifier {
    /// Schedule a notification repeating daily at the given local time.
    fn schedule_daily(
        &self,
        hour: u32,
        minute: u32,
        content: &NotificationContent,
    ) -> Result<NotificationHandle>;

    /// Schedule a one-shot notification after a delay.
    fn schedule_once_after(
        &self,
        seconds: u64,
        content: &NotificationContent,
    ) -> Result<NotificationHandle>;

    /// Cancel a previously scheduled notification. Cancelling a handle that
    /// no longer exists is not an error.
    fn cancel(&self, handle: &NotificationHandle) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledKind {
    Daily { hour: u32, minute: u32 },
    OnceAfter { seconds: u64 },
}

#[derive(Debug, Clone)]
pub struct ScheduledNotification {
    pub handle: NotificationHandle,
    pub kind: ScheduledKind,
    pub content: NotificationContent,
}

/// Recording notifier for testing and development. Does NOT deliver
/// anything.
///
/// Uses `RefCell` for interior mutability since medz is single-threaded;
/// this lets the `Notifier` trait keep `&self` methods without locking.
pub struct RecordingNotifier {
    scheduled: RefCell<Vec<ScheduledNotification>>,
    cancelled: RefCell<Vec<NotificationHandle>>,
    next_id: RefCell<u64>,
    simulate_schedule_error: RefCell<bool>,
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self {
            scheduled: RefCell::new(Vec::new()),
            cancelled: RefCell::new(Vec::new()),
            next_id: RefCell::new(1),
            simulate_schedule_error: RefCell::new(false),
        }
    }
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable scheduling-error simulation for testing error handling.
    pub fn set_simulate_schedule_error(&self, simulate: bool) {
        *self.simulate_schedule_error.borrow_mut() = simulate;
    }

    /// Every request scheduled so far, in order.
    pub fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.scheduled.borrow().clone()
    }

    /// Every handle cancelled so far, in order.
    pub fn cancelled(&self) -> Vec<NotificationHandle> {
        self.cancelled.borrow().clone()
    }

    fn mint_handle(&self) -> NotificationHandle {
        let mut next = self.next_id.borrow_mut();
        let handle = NotificationHandle(format!("notif-{}", *next));
        *next += 1;
        handle
    }

    fn record(&self, kind: ScheduledKind, content: &NotificationContent) -> Result<NotificationHandle> {
        if *self.simulate_schedule_error.borrow() {
            return Err(MedzError::Notification(
                "Simulated scheduling error".to_string(),
            ));
        }
        let handle = self.mint_handle();
        self.scheduled.borrow_mut().push(ScheduledNotification {
            handle: handle.clone(),
            kind,
            content: content.clone(),
        });
        Ok(handle)
    }
}

impl Notifier for RecordingNotifier {
    fn schedule_daily(
        &self,
        hour: u32,
        minute: u32,
        content: &NotificationContent,
    ) -> Result<NotificationHandle> {
        self.record(ScheduledKind::Daily { hour, minute }, content)
    }

    fn schedule_once_after(
        &self,
        seconds: u64,
        content: &NotificationContent,
    ) -> Result<NotificationHandle> {
        self.record(ScheduledKind::OnceAfter { seconds }, content)
    }

    fn cancel(&self, handle: &NotificationHandle) -> Result<()> {
        self.cancelled.borrow_mut().push(handle.clone());
        Ok(())
    }
}
